//! Elemental chemistry data for Kagaku
//!
//! This crate provides the foundational data types for the chemistry
//! simulation:
//! - Elemental states (State)
//! - Material substance classification (Substance)
//! - Physical attributes and state admissibility (Attributes)
//! - The ordered-pair transformation table (StateTable)

mod attributes;
mod state;
mod table;

pub use attributes::Attributes;
pub use state::{STATE_COUNT, State, Substance};
pub use table::StateTable;
