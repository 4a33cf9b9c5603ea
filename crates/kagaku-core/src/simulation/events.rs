//! State-change notifications for the effects collaborator

use serde::{Deserialize, Serialize};

use kagaku_chemistry::State;

use crate::entity::EntityId;

/// One committed state transition
///
/// The effects layer owns all visual lifetime management; a tick with no
/// notifications means stable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChanged {
    pub entity: EntityId,
    pub previous: State,
    pub current: State,
    /// Transient sub-state at commit time (conduction)
    pub sub_state: State,
}
