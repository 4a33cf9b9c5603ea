//! Entity registry and tick loop

mod stats;
mod world;

pub use stats::{NoopStats, SimStats};
pub use world::World;
