//! Elemental states and material substances

use serde::{Deserialize, Serialize};

/// Number of elemental states (table dimension)
pub const STATE_COUNT: usize = 6;

/// Elemental state carried by every chemistry participant
///
/// The discriminant order matches the rows/columns of the transformation
/// table. There is no meaningful total order between states; the values are
/// only used as a 2D table index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum State {
    #[default]
    Undefined = 0,
    Fire = 1,
    Water = 2,
    Ice = 3,
    Wind = 4,
    Electricity = 5,
}

impl State {
    /// Table index for this state
    pub fn index(self) -> usize {
        self as usize
    }
}

/// What a material is made of
///
/// Elements have no substance; materials react differently per substance
/// (metal conducts electricity regardless of fire rules, liquids cannot
/// catch fire).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Substance {
    Metal,
    Combustible,
    NonCombustible,
    Liquid,
}
