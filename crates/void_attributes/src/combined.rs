//! Several fixed inventories presented as one
//!
//! The global slot space is the concatenation of the parts' slot spaces in
//! order. A prefix-sum table built once at construction resolves a global
//! slot to its part with a binary search.

use crate::empty::EmptyFixedInv;
use crate::error;
use crate::filter::Filter;
use crate::fixed::{FixedInv, FixedInvRef};
use crate::listener::{fire_removal_once, ListenerRemoval, ListenerToken, SlotChangeListener};
use crate::simulation::Simulation;
use crate::stack::Stack;
use crate::view::{FixedInvView, StorageSlot};
use parking_lot::Mutex;
use std::sync::Arc;

/// Concatenation of several fixed inventories
pub struct CombinedFixedInv<S: Stack> {
    parts: Vec<FixedInvRef<S>>,
    /// `offsets[i]` is the first global slot of part `i`; the last entry is
    /// the total slot count.
    offsets: Vec<usize>,
}

impl<S: Stack> CombinedFixedInv<S> {
    /// Combine `parts`.
    ///
    /// No parts gives the shared empty inventory and a single part is
    /// returned as-is.
    pub fn create(mut parts: Vec<FixedInvRef<S>>) -> FixedInvRef<S> {
        match parts.len() {
            0 => EmptyFixedInv::shared(),
            1 => parts.swap_remove(0),
            _ => Arc::new(Self::new(parts)),
        }
    }

    /// Always build a wrapper, even for zero or one part
    pub fn new(parts: Vec<FixedInvRef<S>>) -> Self {
        let mut offsets = Vec::with_capacity(parts.len() + 1);
        let mut total = 0;
        offsets.push(0);
        for part in &parts {
            total += part.slot_count();
            offsets.push(total);
        }
        log::debug!("Combined {} inventories into {} slots", parts.len(), total);
        Self { parts, offsets }
    }

    /// The combined parts, in slot order
    pub fn parts(&self) -> &[FixedInvRef<S>] {
        &self.parts
    }

    /// Resolve a global slot to `(part index, local slot)`.
    ///
    /// # Panics
    ///
    /// If `slot` is out of range.
    pub fn resolve(&self, slot: usize) -> (usize, usize) {
        error::assert_slot(slot, self.slot_count());
        // Last part whose first slot is <= slot; empty parts share an offset
        // with their successor and are skipped by taking the last match.
        let part = self.offsets.partition_point(|&offset| offset <= slot) - 1;
        (part, slot - self.offsets[part])
    }

    fn part_for(&self, slot: usize) -> (&FixedInvRef<S>, usize) {
        let (part, local) = self.resolve(slot);
        (&self.parts[part], local)
    }
}

impl<S: Stack> FixedInvView<S> for CombinedFixedInv<S> {
    fn slot_count(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    fn get_stack(&self, slot: usize) -> S {
        let (inv, local) = self.part_for(slot);
        inv.get_stack(local)
    }

    fn filter_for_slot(&self, slot: usize) -> Filter<S> {
        let (inv, local) = self.part_for(slot);
        inv.filter_for_slot(local)
    }

    fn is_valid_for_slot(&self, slot: usize, stack: &S) -> bool {
        let (inv, local) = self.part_for(slot);
        inv.is_valid_for_slot(local, stack)
    }

    fn max_amount(&self, slot: usize, stack: &S) -> u32 {
        let (inv, local) = self.part_for(slot);
        inv.max_amount(local, stack)
    }

    fn storage_slot(&self, slot: usize) -> StorageSlot {
        let (inv, local) = self.part_for(slot);
        inv.storage_slot(local)
    }

    fn add_listener(
        &self,
        listener: SlotChangeListener<S>,
        removal: ListenerRemoval,
    ) -> Option<ListenerToken> {
        // Whichever part drops its listener first runs the outer removal and
        // releases the other parts' registrations; the rest find both cells
        // already empty.
        let removal = Arc::new(Mutex::new(Some(removal)));
        let children: Arc<Mutex<Vec<ListenerToken>>> = Arc::new(Mutex::new(Vec::new()));
        let mut tokens = Vec::with_capacity(self.parts.len());

        for (index, part) in self.parts.iter().enumerate() {
            let offset = self.offsets[index];
            let forward = Arc::clone(&listener);
            let part_removal = Arc::clone(&removal);
            let part_children = Arc::clone(&children);

            let token = part.add_listener(
                Arc::new(move |slot: usize, before: &S, after: &S| {
                    forward(offset + slot, before, after)
                }),
                Box::new(move || {
                    release_all(&part_children);
                    fire_removal_once(&part_removal);
                }),
            );

            match token {
                Some(token) => tokens.push(token),
                None => {
                    log::warn!(
                        "Part {} of a combined inventory refused a listener, rolling back {} registration(s)",
                        index,
                        tokens.len()
                    );
                    // Registration failed as a whole, so the caller's removal
                    // callback must not run.
                    drop(removal.lock().take());
                    for token in tokens {
                        token.remove();
                    }
                    return None;
                }
            }
        }

        *children.lock() = tokens;
        Some(ListenerToken::new(move || release_all(&children)))
    }
}

/// Remove every token in `cell`. The lock is released before any removal
/// runs, since removals re-enter the cell.
fn release_all(cell: &Mutex<Vec<ListenerToken>>) {
    let tokens = std::mem::take(&mut *cell.lock());
    for token in tokens {
        token.remove();
    }
}

impl<S: Stack> FixedInv<S> for CombinedFixedInv<S> {
    fn set_stack(&self, slot: usize, to: S, simulation: Simulation) -> bool {
        let (inv, local) = self.part_for(slot);
        inv.set_stack(local, to, simulation)
    }

    fn insert_stack(&self, slot: usize, stack: &S, simulation: Simulation) -> S {
        let (inv, local) = self.part_for(slot);
        inv.insert_stack(local, stack, simulation)
    }

    fn extract_stack(
        &self,
        slot: usize,
        filter: Option<&Filter<S>>,
        merge_with: S,
        max_count: u32,
        simulation: Simulation,
    ) -> S {
        let (inv, local) = self.part_for(slot);
        inv.extract_stack(local, filter, merge_with, max_count, simulation)
    }
}
