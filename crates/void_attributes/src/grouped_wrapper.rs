//! Grouped view over a fixed inventory
//!
//! Slots are always visited in ascending index order, so the same call on
//! the same contents always lands in the same slots. A slot aliasing an
//! earlier one (same [`StorageSlot`](crate::view::StorageSlot)) is skipped,
//! so every stored stack is counted and filled once and simulation agrees
//! with the real transfer.

use crate::filter::Filter;
use crate::fixed::FixedInvRef;
use crate::grouped::{Extractable, GroupedInvView, Insertable, InvStatistic};
use crate::simulation::Simulation;
use crate::stack::Stack;
use std::collections::HashSet;

/// Adapts a fixed inventory to the slot-agnostic interfaces
pub struct GroupedInvFixedWrapper<S: Stack> {
    inv: FixedInvRef<S>,
    /// First slot of each distinct storage cell, ascending
    slots: Vec<usize>,
}

impl<S: Stack> GroupedInvFixedWrapper<S> {
    /// Wrap `inv`
    pub fn new(inv: FixedInvRef<S>) -> Self {
        let mut seen = HashSet::new();
        let slots: Vec<usize> = (0..inv.slot_count())
            .filter(|&slot| seen.insert(inv.storage_slot(slot)))
            .collect();
        if slots.len() < inv.slot_count() {
            log::debug!(
                "Grouped view skips {} aliased slot(s)",
                inv.slot_count() - slots.len()
            );
        }
        Self { inv, slots }
    }

    /// The wrapped inventory
    pub fn inner(&self) -> &FixedInvRef<S> {
        &self.inv
    }

    /// Slots this view visits, in order
    pub fn visited_slots(&self) -> &[usize] {
        &self.slots
    }
}

impl<S: Stack> GroupedInvView<S> for GroupedInvFixedWrapper<S> {
    fn stored_stacks(&self) -> Vec<S> {
        let mut kinds: Vec<(S, u64)> = Vec::new();
        for &slot in &self.slots {
            let stack = self.inv.get_stack(slot);
            if stack.is_empty() {
                continue;
            }
            match kinds.iter_mut().find(|(kind, _)| kind.same_kind(&stack)) {
                Some((_, total)) => *total += u64::from(stack.count()),
                None => {
                    let count = u64::from(stack.count());
                    kinds.push((stack, count));
                }
            }
        }

        kinds
            .into_iter()
            .map(|(kind, total)| kind.with_count(u32::try_from(total).unwrap_or(u32::MAX)))
            .collect()
    }

    fn total_amount(&self, kind: &S) -> u64 {
        self.slots
            .iter()
            .map(|&slot| self.inv.get_stack(slot))
            .filter(|stack| !stack.is_empty() && stack.same_kind(kind))
            .map(|stack| u64::from(stack.count()))
            .sum()
    }

    fn statistics(&self, filter: &Filter<S>) -> InvStatistic {
        let mut stats = InvStatistic::default();
        for &slot in &self.slots {
            let stack = self.inv.get_stack(slot);
            if stack.is_empty() || !filter.matches(&stack) {
                continue;
            }
            let max = u64::from(self.inv.max_amount(slot, &stack));
            let count = u64::from(stack.count());
            stats.amount += count;
            stats.space_addable += max.saturating_sub(count);
            stats.space_total += max;
        }
        stats
    }
}

impl<S: Stack> Insertable<S> for GroupedInvFixedWrapper<S> {
    fn attempt_insertion(&self, stack: &S, simulation: Simulation) -> S {
        let mut remainder = stack.clone();
        for &slot in &self.slots {
            if remainder.is_empty() {
                break;
            }
            remainder = self.inv.insert_stack(slot, &remainder, simulation);
        }
        remainder
    }

    fn insertion_filter(&self) -> Filter<S> {
        Filter::any_of((0..self.inv.slot_count()).map(|slot| self.inv.filter_for_slot(slot)))
    }
}

impl<S: Stack> Extractable<S> for GroupedInvFixedWrapper<S> {
    fn attempt_extraction(&self, filter: &Filter<S>, max_amount: u32, simulation: Simulation) -> S {
        let mut extracted = S::empty();
        for &slot in &self.slots {
            let remaining = max_amount.saturating_sub(extracted.count());
            if remaining == 0 {
                break;
            }
            extracted = self
                .inv
                .extract_stack(slot, Some(filter), extracted, remaining, simulation);
        }
        extracted
    }
}
