//! World - entity registry, contact intake and the tick loop

use ahash::{AHashMap, AHashSet};

use kagaku_chemistry::State;

use crate::config::{EntityKind, EntitySpec};
use crate::entity::{Entity, EntityId, Kind};
use crate::error::RegisterError;
use crate::simulation::{InteractionResolver, StateChanged};
use crate::world::{NoopStats, SimStats};

/// The chemistry world: every registered participant plus this tick's
/// contact set
///
/// Single-threaded cooperative tick loop: the host reports contacts
/// between ticks, then calls [`World::tick`] once per simulation frame.
/// All resolutions of a tick complete before the next tick begins.
pub struct World {
    entities: AHashMap<EntityId, Entity>,
    /// Contact pairs reported since the last tick, keyed high-id-first
    contacts: AHashSet<(EntityId, EntityId)>,
    /// Outbound notification queue, drained by the effects collaborator
    events: Vec<StateChanged>,
    next_id: u64,
    current_tick: u64,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: AHashMap::new(),
            contacts: AHashSet::new(),
            events: Vec::new(),
            next_id: 1,
            current_tick: 0,
        }
    }

    /// Register a new chemistry participant
    ///
    /// Assigns a monotonically increasing id (the symmetry tie-break
    /// order). A material spec without a substance is rejected here, so
    /// resolution never sees one.
    pub fn register(&mut self, spec: EntitySpec) -> Result<EntityId, RegisterError> {
        let kind = match spec.kind {
            EntityKind::Element => Kind::Element,
            EntityKind::Material => match spec.substance {
                Some(substance) => Kind::Material(substance),
                None => return Err(RegisterError::MissingSubstance(spec.name)),
            },
        };

        let id = EntityId::from_raw(self.next_id);
        self.next_id += 1;

        let entity = Entity::new(id, kind, &spec);
        log::debug!("registered {} '{}' as {:?}", id, entity.name(), kind);
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Remove a participant and every pending contact involving it
    pub fn deregister(&mut self, id: EntityId) -> bool {
        if self.entities.remove(&id).is_none() {
            return false;
        }
        self.contacts.retain(|&(a, b)| a != id && b != id);
        log::debug!("deregistered {}", id);
        true
    }

    /// Report that two entities are currently touching
    ///
    /// Invoked by the collision collaborator once per tick per touching
    /// pair, repeated while the contact persists, in either order. Both
    /// orientations collapse onto one canonical pair, so a mutual contact
    /// resolves exactly once per tick.
    pub fn on_contact(&mut self, a: EntityId, b: EntityId) {
        if a == b {
            return;
        }
        if !self.entities.contains_key(&a) || !self.entities.contains_key(&b) {
            log::warn!("contact report for unknown entity pair ({a}, {b}), skipping");
            return;
        }
        self.contacts.insert(Self::orient(a, b));
    }

    /// Report that a contact has ceased
    ///
    /// Ends transient conduction: an entity whose primary state became
    /// Electricity through contact is restored to its previous state, but
    /// only when the departing partner is the electricity carrier. An
    /// unrelated neighbor leaving must not de-electrify the entity.
    pub fn on_contact_end(&mut self, a: EntityId, b: EntityId) {
        self.contacts.remove(&Self::orient(a, b));

        for (id, other) in [(a, b), (b, a)] {
            let source_carries = self
                .entities
                .get(&other)
                .is_some_and(Entity::has_electricity);
            if !source_carries {
                continue;
            }
            let Some(entity) = self.entities.get_mut(&id) else {
                continue;
            };
            if entity.state() == State::Electricity
                && entity.previous_state() != State::Electricity
            {
                let baseline = entity.previous_state();
                let previous = entity.commit(baseline);
                log::debug!("{} conduction ended, back to {:?}", entity.name(), baseline);
                self.events.push(StateChanged {
                    entity: id,
                    previous,
                    current: baseline,
                    sub_state: entity.sub_state(),
                });
            }
        }
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.tick_with_stats(dt, &mut NoopStats);
    }

    /// Advance the simulation, recording per-tick statistics
    pub fn tick_with_stats(&mut self, dt: f32, stats: &mut dyn SimStats) {
        self.current_tick += 1;

        // Sub-states are level-triggered: cleared here, re-asserted by the
        // resolver while the electrified contact persists.
        for entity in self.entities.values_mut() {
            entity.clear_sub_state();
        }

        // Deterministic resolution order over this tick's pairs.
        let mut pairs: Vec<_> = self.contacts.iter().copied().collect();
        pairs.sort();

        for (first, second) in pairs {
            match self.entities.get_disjoint_mut([&first, &second]) {
                [Some(a), Some(b)] => {
                    InteractionResolver::resolve_pair(a, b, dt, &mut self.events, stats);
                }
                _ => log::warn!("skipping contact ({first}, {second}): participant removed"),
            }
        }

        // Decay timers whose condition did not hold this tick.
        for entity in self.entities.values_mut() {
            entity.settle_timers(dt);
        }

        // Persisting contacts are re-reported by the collaborator before
        // the next tick.
        self.contacts.clear();
    }

    /// Take this tick's state-change notifications
    pub fn drain_events(&mut self) -> Vec<StateChanged> {
        std::mem::take(&mut self.events)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn state_of(&self, id: EntityId) -> Option<State> {
        self.entities.get(&id).map(Entity::state)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    fn orient(a: EntityId, b: EntityId) -> (EntityId, EntityId) {
        if a > b { (a, b) } else { (b, a) }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
