//! Slot-agnostic inventory access
//!
//! Insertables accept stacks without being told where to put them,
//! extractables hand out stacks by filter, and grouped inventories add an
//! aggregate view of what is stored.

use crate::filter::Filter;
use crate::simulation::Simulation;
use crate::stack::Stack;
use serde::{Deserialize, Serialize};

/// Accepts stacks
pub trait Insertable<S: Stack>: Send + Sync {
    /// Insert `stack`, returning the portion that was not accepted
    fn attempt_insertion(&self, stack: &S, simulation: Simulation) -> S;

    /// Filter describing what this might accept. Passing it is no promise
    /// that an insertion will succeed.
    fn insertion_filter(&self) -> Filter<S> {
        Filter::Everything
    }
}

/// Hands out stacks
pub trait Extractable<S: Stack>: Send + Sync {
    /// Extract up to `max_amount` units of a single kind matching `filter`
    fn attempt_extraction(&self, filter: &Filter<S>, max_amount: u32, simulation: Simulation) -> S;

    /// Extract up to `max_amount` units of whatever comes first
    fn attempt_any_extraction(&self, max_amount: u32, simulation: Simulation) -> S {
        self.attempt_extraction(&Filter::Everything, max_amount, simulation)
    }
}

/// Both an [`Insertable`] and an [`Extractable`]
pub trait Transferable<S: Stack>: Insertable<S> + Extractable<S> {}

impl<S: Stack, T: Insertable<S> + Extractable<S> + ?Sized> Transferable<S> for T {}

/// Totals for the stacks matching a filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvStatistic {
    /// Units currently stored
    pub amount: u64,
    /// Units that could still be added to the occupied slots
    pub space_addable: u64,
    /// Total capacity of the occupied slots
    pub space_total: u64,
}

/// Aggregate read access ignoring slot boundaries
pub trait GroupedInvView<S: Stack>: Send + Sync {
    /// One stack per distinct kind, holding the total stored amount
    /// (saturated to the stack's count range). Order is deterministic.
    fn stored_stacks(&self) -> Vec<S>;

    /// Total units stored of `kind`'s kind
    fn total_amount(&self, kind: &S) -> u64;

    /// Totals for every stored stack matching `filter`
    fn statistics(&self, filter: &Filter<S>) -> InvStatistic;
}

/// A grouped inventory: aggregate view plus slot-agnostic transfer
pub trait GroupedInv<S: Stack>: GroupedInvView<S> + Transferable<S> {}

impl<S: Stack, T: GroupedInvView<S> + Transferable<S> + ?Sized> GroupedInv<S> for T {}
