//! An arbitrary selection (and ordering) of another inventory's slots

use crate::empty::EmptyFixedInv;
use crate::error::{self, InvError, Result};
use crate::filter::Filter;
use crate::fixed::{FixedInv, FixedInvRef};
use crate::listener::{ListenerRemoval, ListenerToken, SlotChangeListener};
use crate::simulation::Simulation;
use crate::stack::Stack;
use crate::view::{FixedInvView, StorageSlot};
use std::collections::HashMap;
use std::sync::Arc;

/// Local slot `i` is parent slot `slots[i]`.
///
/// The same parent slot may appear several times; every local slot mapped to
/// it observes and mutates the same storage.
pub struct MappedFixedInv<S: Stack> {
    inv: FixedInvRef<S>,
    slots: Vec<usize>,
    /// Parent slot to every local slot aliasing it, for listener translation
    inverse: Arc<HashMap<usize, Vec<usize>>>,
}

impl<S: Stack> MappedFixedInv<S> {
    /// Map `inv` through `slots`.
    ///
    /// An empty mapping gives the shared empty inventory and the identity
    /// mapping over every slot gives `inv` back. Fails if any entry is not a
    /// slot of `inv`.
    pub fn create(inv: &FixedInvRef<S>, slots: &[usize]) -> Result<FixedInvRef<S>> {
        let slot_count = inv.slot_count();
        for (index, &slot) in slots.iter().enumerate() {
            if slot >= slot_count {
                return Err(InvError::InvalidMapping {
                    index,
                    slot,
                    slot_count,
                });
            }
        }

        if slots.is_empty() {
            return Ok(EmptyFixedInv::shared());
        }
        if slots.len() == slot_count && slots.iter().enumerate().all(|(i, &s)| i == s) {
            return Ok(Arc::clone(inv));
        }

        let mut inverse: HashMap<usize, Vec<usize>> = HashMap::new();
        for (local, &parent) in slots.iter().enumerate() {
            inverse.entry(parent).or_default().push(local);
        }

        log::debug!("Mapped inventory over slots {:?}", slots);
        Ok(Arc::new(Self {
            inv: Arc::clone(inv),
            slots: slots.to_vec(),
            inverse: Arc::new(inverse),
        }))
    }

    /// The parent slot behind each local slot
    pub fn mapping(&self) -> &[usize] {
        &self.slots
    }

    fn parent_slot(&self, slot: usize) -> usize {
        error::assert_slot(slot, self.slots.len());
        self.slots[slot]
    }
}

impl<S: Stack> FixedInvView<S> for MappedFixedInv<S> {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn get_stack(&self, slot: usize) -> S {
        self.inv.get_stack(self.parent_slot(slot))
    }

    fn filter_for_slot(&self, slot: usize) -> Filter<S> {
        self.inv.filter_for_slot(self.parent_slot(slot))
    }

    fn is_valid_for_slot(&self, slot: usize, stack: &S) -> bool {
        self.inv.is_valid_for_slot(self.parent_slot(slot), stack)
    }

    fn max_amount(&self, slot: usize, stack: &S) -> u32 {
        self.inv.max_amount(self.parent_slot(slot), stack)
    }

    fn storage_slot(&self, slot: usize) -> StorageSlot {
        self.inv.storage_slot(self.parent_slot(slot))
    }

    fn add_listener(
        &self,
        listener: SlotChangeListener<S>,
        removal: ListenerRemoval,
    ) -> Option<ListenerToken> {
        let inverse = Arc::clone(&self.inverse);
        self.inv.add_listener(
            Arc::new(move |slot: usize, before: &S, after: &S| {
                if let Some(locals) = inverse.get(&slot) {
                    for &local in locals {
                        listener(local, before, after);
                    }
                }
            }),
            removal,
        )
    }
}

impl<S: Stack> FixedInv<S> for MappedFixedInv<S> {
    fn set_stack(&self, slot: usize, to: S, simulation: Simulation) -> bool {
        self.inv.set_stack(self.parent_slot(slot), to, simulation)
    }

    fn insert_stack(&self, slot: usize, stack: &S, simulation: Simulation) -> S {
        self.inv.insert_stack(self.parent_slot(slot), stack, simulation)
    }

    fn extract_stack(
        &self,
        slot: usize,
        filter: Option<&Filter<S>>,
        merge_with: S,
        max_count: u32,
        simulation: Simulation,
    ) -> S {
        self.inv
            .extract_stack(self.parent_slot(slot), filter, merge_with, max_count, simulation)
    }
}
