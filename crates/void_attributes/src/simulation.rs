//! Dry-run flag threaded through every mutating operation

use serde::{Deserialize, Serialize};

/// Whether a mutating call should actually change anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Simulation {
    /// Report what would happen without any observable mutation
    Simulate,
    /// Perform the operation
    Action,
}

impl Simulation {
    /// Check if this is a dry run
    #[inline]
    pub fn is_simulate(self) -> bool {
        self == Simulation::Simulate
    }

    /// Check if this mutates
    #[inline]
    pub fn is_action(self) -> bool {
        self == Simulation::Action
    }
}
