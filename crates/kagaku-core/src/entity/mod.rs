//! Chemistry entities
//!
//! An entity is one chemistry-capable participant: an element (state
//! carrier with no substance) or a material (physical object whose
//! elemental aspect is driven by elements). The two kinds are a closed
//! tagged variant; there is no downcasting anywhere in the resolver.

use serde::{Deserialize, Serialize};

use kagaku_chemistry::{Attributes, State, Substance};

use crate::config::EntitySpec;
use crate::simulation::timers::GatedTimer;

/// Unique identifier for entities, assigned monotonically at registration
///
/// The raw value is the registration sequence number; its total order is
/// what breaks the symmetry of mutual contacts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(u64);

impl EntityId {
    pub fn from_raw(id: u64) -> Self {
        EntityId(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Element or material, with the material's substance attached
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    Element,
    Material(Substance),
}

/// One chemistry participant
#[derive(Clone, Debug)]
pub struct Entity {
    id: EntityId,
    name: String,
    kind: Kind,
    state: State,
    previous_state: State,
    sub_state: State,
    pub attributes: Attributes,

    pub(crate) ignition: GatedTimer,
    pub(crate) burn_out: GatedTimer,
    pub(crate) melt: GatedTimer,
}

impl Entity {
    pub(crate) fn new(id: EntityId, kind: Kind, spec: &EntitySpec) -> Self {
        let attributes = spec.attributes();

        let mut state = State::Undefined;
        if spec.default_state != State::Undefined {
            if attributes.permits(spec.default_state) {
                state = spec.default_state;
            } else {
                log::warn!(
                    "{}: default state {:?} is not admissible for its attributes, \
                     starting Undefined",
                    spec.name,
                    spec.default_state
                );
            }
        }

        Self {
            id,
            name: spec.name.clone(),
            kind,
            state,
            // The default state is the baseline, not a transition.
            previous_state: state,
            sub_state: State::Undefined,
            attributes,
            ignition: GatedTimer::new(spec.ignition),
            burn_out: GatedTimer::new(spec.burn_out_by_wind),
            melt: GatedTimer::new(spec.melting),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn previous_state(&self) -> State {
        self.previous_state
    }

    /// Tick-scoped transient state (conduction), cleared every tick unless
    /// re-asserted by continued contact
    pub fn sub_state(&self) -> State {
        self.sub_state
    }

    /// Electrified either way: primary state or transient conduction
    pub fn has_electricity(&self) -> bool {
        self.state == State::Electricity || self.sub_state == State::Electricity
    }

    /// Accumulated ignition contact time (diagnostics)
    pub fn ignition_progress(&self) -> f32 {
        self.ignition.accumulated()
    }

    /// Accumulated wind contact time against a burning entity (diagnostics)
    pub fn burn_out_progress(&self) -> f32 {
        self.burn_out.accumulated()
    }

    /// Accumulated fire contact time against a frozen entity (diagnostics)
    pub fn melt_progress(&self) -> f32 {
        self.melt.accumulated()
    }

    /// Apply a state transition, shadowing the old state. Returns the
    /// state that was replaced. Callers are responsible for gating and
    /// the attribute veto.
    pub(crate) fn commit(&mut self, target: State) -> State {
        let previous = self.state;
        self.previous_state = previous;
        self.state = target;
        previous
    }

    pub(crate) fn set_sub_state(&mut self, state: State) {
        self.sub_state = state;
    }

    pub(crate) fn clear_sub_state(&mut self) {
        self.sub_state = State::Undefined;
    }

    pub(crate) fn settle_timers(&mut self, dt: f32) {
        self.ignition.settle(dt);
        self.burn_out.settle(dt);
        self.melt.settle(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EntitySpec;

    #[test]
    fn test_default_state_applied_at_creation() {
        let spec = EntitySpec::fire_element("campfire");
        let entity = Entity::new(EntityId::from_raw(1), Kind::Element, &spec);
        assert_eq!(entity.state(), State::Fire);
        // Baseline, not a transition
        assert_eq!(entity.previous_state(), State::Fire);
    }

    #[test]
    fn test_inadmissible_default_state_falls_back_to_undefined() {
        let spec = EntitySpec {
            combustible: false,
            default_state: State::Fire,
            ..EntitySpec::default()
        };
        let entity = Entity::new(EntityId::from_raw(1), Kind::Element, &spec);
        assert_eq!(entity.state(), State::Undefined);
    }

    #[test]
    fn test_commit_shadows_previous_state() {
        let spec = EntitySpec::water_element("puddle");
        let mut entity = Entity::new(EntityId::from_raw(1), Kind::Element, &spec);

        let replaced = entity.commit(State::Ice);
        assert_eq!(replaced, State::Water);
        assert_eq!(entity.state(), State::Ice);
        assert_eq!(entity.previous_state(), State::Water);
    }

    #[test]
    fn test_has_electricity_chains_through_sub_state() {
        let spec = EntitySpec::metal_material("rail");
        let mut entity = Entity::new(EntityId::from_raw(1), Kind::Material(Substance::Metal), &spec);
        assert!(!entity.has_electricity());

        entity.set_sub_state(State::Electricity);
        assert!(entity.has_electricity());
        assert_eq!(entity.state(), State::Undefined);

        entity.clear_sub_state();
        assert!(!entity.has_electricity());
    }

    #[test]
    fn test_entity_id_ordering_is_registration_order() {
        let a = EntityId::from_raw(1);
        let b = EntityId::from_raw(2);
        assert!(b > a);
        assert_eq!(a.raw(), 1);
    }
}
