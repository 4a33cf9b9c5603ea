//! Pairwise interaction resolution
//!
//! The algorithmic heart of the engine. Given one contact pair per tick,
//! the resolver orients it canonically, classifies the interaction
//! category, consults the transformation table, applies threshold gating
//! and the attribute veto, and commits whatever survives.

use kagaku_chemistry::{State, StateTable};

use crate::entity::{Entity, Kind};
use crate::simulation::events::StateChanged;
use crate::world::SimStats;

pub struct InteractionResolver;

impl InteractionResolver {
    /// Resolve one contact pair for this tick
    ///
    /// Orientation-insensitive: the pair is normalized so the higher
    /// entity id drives, which together with the world-level pair
    /// de-duplication guarantees a mutual contact is applied exactly once
    /// per tick.
    pub fn resolve_pair(
        a: &mut Entity,
        b: &mut Entity,
        dt: f32,
        events: &mut Vec<StateChanged>,
        stats: &mut dyn SimStats,
    ) {
        if a.id() < b.id() {
            return Self::resolve_pair(b, a, dt, events, stats);
        }
        stats.record_resolution();

        // Conduction is level-triggered and independent of the primary
        // transition below: it re-asserts the sub-state every tick the
        // contact persists and never overwrites the base state.
        Self::conduct(a, b);
        Self::conduct(b, a);

        // Same state: nothing to transform.
        if a.state() == b.state() {
            return;
        }

        match (a.kind(), b.kind()) {
            (Kind::Element, Kind::Element) => {
                // Snapshot both states first; the table is authored against
                // the pre-interaction pair.
                let (state_a, state_b) = (a.state(), b.state());
                let (result_a, result_b) = StateTable::element(state_a, state_b);
                Self::apply(a, state_b, result_a, dt, events, stats);
                Self::apply(b, state_a, result_b, dt, events, stats);
            }
            (Kind::Element, Kind::Material(substance)) => {
                // Elements perturb materials, never the other way around.
                let (element_state, material_state) = (a.state(), b.state());
                let (_, result) = StateTable::material(element_state, material_state, substance);
                Self::apply(b, element_state, result, dt, events, stats);
            }
            (Kind::Material(substance), Kind::Element) => {
                let (material_state, element_state) = (a.state(), b.state());
                let (_, result) = StateTable::material(element_state, material_state, substance);
                Self::apply(a, element_state, result, dt, events, stats);
            }
            // Materials never interact directly.
            (Kind::Material(_), Kind::Material(_)) => {}
        }
    }

    /// Propagate transient electricity from `source` to `receiver`
    fn conduct(receiver: &mut Entity, source: &Entity) {
        if source.has_electricity() && receiver.attributes.conductor {
            receiver.set_sub_state(State::Electricity);
        }
    }

    /// Gate, veto and commit one side's transition
    fn apply(
        entity: &mut Entity,
        partner_state: State,
        target: State,
        dt: f32,
        events: &mut Vec<StateChanged>,
        stats: &mut dyn SimStats,
    ) {
        if target == entity.state() {
            return;
        }
        if !Self::gate_passed(entity, partner_state, target, dt) {
            return;
        }
        if !entity.attributes.permits(target) {
            // Expected, silent from the caller's perspective.
            stats.record_veto();
            log::debug!(
                "{} vetoed {:?} -> {:?}",
                entity.name(),
                entity.state(),
                target
            );
            return;
        }

        let previous = entity.commit(target);
        log::debug!("{} {:?} -> {:?}", entity.name(), previous, target);
        events.push(StateChanged {
            entity: entity.id(),
            previous,
            current: target,
            sub_state: entity.sub_state(),
        });
        stats.record_state_change();
    }

    /// Threshold gating for the borderline transition triples
    ///
    /// Only three transitions are gated; everything else the table yields
    /// applies immediately. The timer belongs to the entity undergoing the
    /// transition; the partner merely supplies the contact condition. Melt
    /// gating checks `freezable` on the melting side.
    fn gate_passed(entity: &mut Entity, partner_state: State, target: State, dt: f32) -> bool {
        match (entity.state(), partner_state, target) {
            (State::Undefined, State::Fire, State::Fire) => entity.ignition.advance(dt),
            (State::Fire, State::Wind, State::Undefined) => entity.burn_out.advance(dt),
            (State::Ice, State::Fire, State::Undefined) if entity.attributes.freezable => {
                entity.melt.advance(dt)
            }
            _ => true,
        }
    }
}
