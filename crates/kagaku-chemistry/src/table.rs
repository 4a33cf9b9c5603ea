//! The ordered-pair state transformation table
//!
//! A pure lookup: given two states (row, then column), what does each side
//! become. The table is authored per ordered pair and is NOT symmetric by
//! construction; `element(a, b)` need not equal the swap of `element(b, a)`.

use crate::state::{STATE_COUNT, State, Substance};

use State::{Electricity, Fire, Ice, Undefined, Water, Wind};

/// Result pair for the row entity and the column entity, in that order
type Outcome = (State, State);

/// Row-major table: `TABLE[row.index()][column.index()]`
const TABLE: [[Outcome; STATE_COUNT]; STATE_COUNT] = [
    // row: Undefined
    [
        (Undefined, Undefined),
        (Fire, Fire), // fire spreads (ignition-gated)
        (Undefined, Water),
        (Ice, Ice),
        (Undefined, Wind),
        (Undefined, Electricity),
    ],
    // row: Fire
    [
        (Fire, Fire), // fire spreads (ignition-gated)
        (Fire, Fire),
        (Undefined, Water), // water extinguishes fire
        (Fire, Undefined),  // fire melts ice (melt-gated)
        (Undefined, Wind),  // wind blows fire out (burn-out-gated)
        (Fire, Fire),       // fire dominates electricity
    ],
    // row: Water
    [
        (Water, Undefined),
        (Water, Undefined),
        (Water, Water),
        (Ice, Ice), // water freezes against ice
        (Water, Wind),
        (Water, Electricity),
    ],
    // row: Ice
    [
        (Ice, Ice),
        (Undefined, Fire), // ice melts away (melt-gated)
        (Ice, Ice),
        (Ice, Ice),
        (Ice, Wind),
        (Ice, Electricity),
    ],
    // row: Wind
    [
        (Wind, Undefined),
        (Wind, Undefined), // wind blows fire out (burn-out-gated)
        (Wind, Water),
        (Wind, Ice),
        (Wind, Wind),
        (Wind, Electricity),
    ],
    // row: Electricity
    //
    // Electricity persists against everything except fire; conduction to
    // the partner happens through the tick-scoped sub-state, not through
    // a primary transition (metal materials are the one exception, see
    // `material`).
    [
        (Electricity, Undefined),
        (Fire, Fire), // fire dominates electricity
        (Electricity, Water),
        (Electricity, Ice),
        (Electricity, Wind),
        (Electricity, Electricity),
    ],
];

/// The fixed transformation table
pub struct StateTable;

impl StateTable {
    /// Element-vs-element lookup for the ordered pair `(a, b)`
    ///
    /// Returns the resulting state for `a` and for `b`. Pure, no side
    /// effects; gating and attribute admissibility are the resolver's job.
    pub fn element(a: State, b: State) -> (State, State) {
        TABLE[a.index()][b.index()]
    }

    /// Element-vs-material lookup, branching on the material's substance
    ///
    /// The element occupies the row, the material the column. Only the
    /// material-side result is meaningful to callers (elements are never
    /// perturbed by materials), but both sides are returned for symmetry
    /// with [`StateTable::element`].
    pub fn material(element: State, material: State, substance: Substance) -> (State, State) {
        // Metal conducts electricity regardless of the fire-state rules.
        if substance == Substance::Metal && element == Electricity {
            log::trace!("metal conducts: {material:?} -> Electricity");
            return (Electricity, Electricity);
        }

        let (for_element, for_material) = Self::element(element, material);

        // Substance-level filtering of the material-side result. The
        // attribute veto would catch these too for well-configured
        // entities; the table itself must not hand out impossible states.
        let for_material = match substance {
            Substance::Combustible => for_material,
            Substance::NonCombustible | Substance::Liquid if for_material == Fire => material,
            Substance::Metal if for_material == Fire || for_material == Ice => material,
            _ => for_material,
        };

        (for_element, for_material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_state_is_unchanged() {
        for state in [Undefined, Fire, Water, Ice, Wind, Electricity] {
            assert_eq!(StateTable::element(state, state), (state, state));
        }
    }

    #[test]
    fn test_canonical_fire_entries() {
        assert_eq!(StateTable::element(Fire, Water), (Undefined, Water));
        assert_eq!(StateTable::element(Fire, Ice), (Fire, Undefined));
        assert_eq!(StateTable::element(Fire, Wind), (Undefined, Wind));
        assert_eq!(StateTable::element(Water, Fire), (Water, Undefined));
    }

    #[test]
    fn test_fire_spreads_to_undefined() {
        assert_eq!(StateTable::element(Fire, Undefined), (Fire, Fire));
        assert_eq!(StateTable::element(Undefined, Fire), (Fire, Fire));
    }

    #[test]
    fn test_table_is_not_symmetric() {
        // (Water, Ice) freezes the water; (Ice, Water) also freezes, but
        // the pairs are authored independently.
        assert_eq!(StateTable::element(Water, Ice), (Ice, Ice));
        assert_eq!(StateTable::element(Ice, Water), (Ice, Ice));

        // Wind rows are authored from the wind side and do not mirror the
        // fire row exactly.
        assert_eq!(StateTable::element(Wind, Fire), (Wind, Undefined));
        assert_eq!(StateTable::element(Fire, Wind), (Undefined, Wind));
    }

    #[test]
    fn test_fire_dominates_electricity() {
        assert_eq!(StateTable::element(Electricity, Fire), (Fire, Fire));
        assert_eq!(StateTable::element(Fire, Electricity), (Fire, Fire));
    }

    #[test]
    fn test_electricity_persists() {
        assert_eq!(StateTable::element(Electricity, Water), (Electricity, Water));
        assert_eq!(StateTable::element(Electricity, Ice), (Electricity, Ice));
        assert_eq!(StateTable::element(Electricity, Wind), (Electricity, Wind));
    }

    #[test]
    fn test_metal_conducts_electricity() {
        assert_eq!(
            StateTable::material(Electricity, Undefined, Substance::Metal),
            (Electricity, Electricity)
        );
        // Even a wet metal surface conducts
        assert_eq!(
            StateTable::material(Electricity, Water, Substance::Metal),
            (Electricity, Electricity)
        );
    }

    #[test]
    fn test_metal_never_burns_or_freezes() {
        let (_, result) = StateTable::material(Fire, Undefined, Substance::Metal);
        assert_eq!(result, Undefined);

        // Base row would freeze the column side; metal stays put.
        let (_, result) = StateTable::material(Ice, Undefined, Substance::Metal);
        assert_eq!(result, Undefined);
    }

    #[test]
    fn test_liquid_material_never_catches_fire() {
        let (_, result) = StateTable::material(Fire, Undefined, Substance::Liquid);
        assert_eq!(result, Undefined);
    }

    #[test]
    fn test_non_combustible_never_catches_fire() {
        let (_, result) = StateTable::material(Fire, Undefined, Substance::NonCombustible);
        assert_eq!(result, Undefined);
    }

    #[test]
    fn test_combustible_material_follows_fire_rows() {
        assert_eq!(
            StateTable::material(Fire, Undefined, Substance::Combustible),
            (Fire, Fire)
        );
        assert_eq!(
            StateTable::material(Fire, Water, Substance::Combustible),
            (Undefined, Water)
        );
        assert_eq!(
            StateTable::material(Fire, Ice, Substance::Combustible),
            (Fire, Undefined)
        );
    }
}
