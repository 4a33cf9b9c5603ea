//! Simulation systems - interaction resolution, threshold timers, events

pub mod events;
pub mod resolver;
pub mod timers;

pub use events::StateChanged;
pub use resolver::InteractionResolver;
pub use timers::{GatedTimer, ResetPolicy, ThresholdTimer};
