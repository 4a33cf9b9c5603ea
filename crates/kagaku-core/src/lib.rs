//! Kagaku core — the chemistry interaction engine
//!
//! Consumes contact-pair events from a collision collaborator, resolves
//! them against the transformation table once per tick, and emits
//! state-change notifications for an effects collaborator.

pub mod config;
pub mod entity;
pub mod error;
pub mod simulation;
pub mod world;

pub use config::{EntityKind, EntitySpec, ThresholdSpec};
pub use entity::{Entity, EntityId, Kind};
pub use error::RegisterError;
pub use simulation::{ResetPolicy, StateChanged};
pub use world::{NoopStats, SimStats, World};

// Re-export the data layer so consumers only need one dependency.
pub use kagaku_chemistry::{Attributes, State, StateTable, Substance};
