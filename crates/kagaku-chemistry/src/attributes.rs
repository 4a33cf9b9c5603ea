//! Physical attributes and state admissibility

use serde::{Deserialize, Serialize};

use crate::State;

/// Physical attributes of a chemistry participant
///
/// Attributes decide which states an entity may physically hold. A table
/// result that is not admissible for the target entity is silently
/// suppressed, never an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Can catch fire
    pub combustible: bool,
    /// Can freeze over (and melt again)
    pub freezable: bool,
    /// Conducts electricity
    pub conductor: bool,
    /// Is a fluid (fluids never burn)
    pub liquid: bool,
}

impl Attributes {
    /// Whether this entity may hold the given state
    pub fn permits(&self, state: State) -> bool {
        match state {
            State::Fire => self.combustible && !self.liquid,
            State::Ice => self.freezable,
            State::Electricity => self.conductor,
            State::Undefined | State::Water | State::Wind => true,
        }
    }
}
