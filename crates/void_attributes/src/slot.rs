//! One slot of a fixed inventory, usable wherever an insertable or
//! extractable is expected

use crate::filter::Filter;
use crate::fixed::FixedInvRef;
use crate::grouped::{Extractable, Insertable};
use crate::simulation::Simulation;
use crate::stack::Stack;
use std::fmt;

/// A single slot of a fixed inventory
pub struct SingleSlot<S: Stack> {
    inv: FixedInvRef<S>,
    slot: usize,
}

impl<S: Stack> SingleSlot<S> {
    pub(crate) fn new(inv: FixedInvRef<S>, slot: usize) -> Self {
        Self { inv, slot }
    }

    /// Index of this slot in its inventory
    pub fn index(&self) -> usize {
        self.slot
    }

    /// The inventory this slot belongs to
    pub fn inventory(&self) -> &FixedInvRef<S> {
        &self.inv
    }

    /// A copy of the stored stack
    pub fn get(&self) -> S {
        self.inv.get_stack(self.slot)
    }

    /// Replace the stored stack
    pub fn set(&self, to: S, simulation: Simulation) -> bool {
        self.inv.set_stack(self.slot, to, simulation)
    }

    /// Check if `stack` is the right kind for this slot
    pub fn is_valid(&self, stack: &S) -> bool {
        self.inv.is_valid_for_slot(self.slot, stack)
    }

    /// Extract into an existing stack
    pub fn extract_into(&self, filter: Option<&Filter<S>>, merge_with: S, max_count: u32, simulation: Simulation) -> S {
        self.inv.extract_stack(self.slot, filter, merge_with, max_count, simulation)
    }
}

impl<S: Stack> fmt::Debug for SingleSlot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleSlot")
            .field("slot", &self.slot)
            .field("stack", &self.get())
            .finish()
    }
}

impl<S: Stack> Insertable<S> for SingleSlot<S> {
    fn attempt_insertion(&self, stack: &S, simulation: Simulation) -> S {
        self.inv.insert_stack(self.slot, stack, simulation)
    }

    fn insertion_filter(&self) -> Filter<S> {
        self.inv.filter_for_slot(self.slot)
    }
}

impl<S: Stack> Extractable<S> for SingleSlot<S> {
    fn attempt_extraction(&self, filter: &Filter<S>, max_amount: u32, simulation: Simulation) -> S {
        self.inv
            .extract_stack(self.slot, Some(filter), S::empty(), max_amount, simulation)
    }
}
