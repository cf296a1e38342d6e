//! Rule-limited wrapper over a fixed inventory
//!
//! Rules only ever tighten what the parent allows. They are checked before
//! anything is delegated, and a rule violation comes back in the same shape
//! as a capacity rejection: the remainder, or the unchanged merge target.
//!
//! ```ignore
//! let limited = inv
//!     .limited()
//!     .limit_insertion_count(0..2, 6)?
//!     .retain_minimum(2..3, 1)?
//!     .build();
//! ```

use crate::error::{self, Result};
use crate::filter::Filter;
use crate::fixed::{FixedInv, FixedInvRef};
use crate::listener::{ListenerRemoval, ListenerToken, SlotChangeListener};
use crate::simulation::Simulation;
use crate::stack::Stack;
use crate::transfer;
use crate::view::{FixedInvView, StorageSlot};
use std::ops::Range;
use std::sync::Arc;

/// The rules applied to one slot
#[derive(Debug, Clone)]
pub struct SlotLimit<S> {
    /// Stacks must match this to be inserted
    pub insertion_filter: Filter<S>,
    /// The stored stack must match this to be extracted from
    pub extraction_filter: Filter<S>,
    /// Most units the slot may hold (on top of the parent's own capacity)
    pub max_count: Option<u32>,
    /// Extraction never takes the slot below this many units
    pub min_retained: u32,
    /// Whether anything may be inserted at all
    pub insert_allowed: bool,
    /// Whether anything may be extracted at all
    pub extract_allowed: bool,
}

impl<S> Default for SlotLimit<S> {
    fn default() -> Self {
        Self {
            insertion_filter: Filter::Everything,
            extraction_filter: Filter::Everything,
            max_count: None,
            min_retained: 0,
            insert_allowed: true,
            extract_allowed: true,
        }
    }
}

impl<S: Stack> SlotLimit<S> {
    fn allows_insertion(&self, stack: &S, new_count: u32) -> bool {
        self.insert_allowed
            && self.insertion_filter.matches(stack)
            && self.max_count.map_or(true, |max| new_count <= max)
    }

    fn allows_extraction(&self, current: &S, new_count: u32) -> bool {
        self.extract_allowed && self.extraction_filter.matches(current) && new_count >= self.min_retained
    }
}

/// Builder for [`LimitedFixedInv`]. Rules are frozen by [`build`](Self::build).
pub struct LimitedFixedInvBuilder<S: Stack> {
    inv: FixedInvRef<S>,
    rules: Vec<SlotLimit<S>>,
}

impl<S: Stack> LimitedFixedInvBuilder<S> {
    /// Start with no limits on any slot of `inv`
    pub fn new(inv: FixedInvRef<S>) -> Self {
        let rules = (0..inv.slot_count()).map(|_| SlotLimit::default()).collect();
        Self { inv, rules }
    }

    /// Range covering every slot
    pub fn all_slots(&self) -> Range<usize> {
        0..self.rules.len()
    }

    fn apply(mut self, slots: Range<usize>, mut f: impl FnMut(&mut SlotLimit<S>)) -> Result<Self> {
        error::check_range(slots.start, slots.end, self.rules.len())?;
        for rule in &mut self.rules[slots] {
            f(rule);
        }
        Ok(self)
    }

    /// Only let stacks matching `filter` in (combined with earlier filters)
    pub fn filter_insertions(self, slots: Range<usize>, filter: Filter<S>) -> Result<Self> {
        self.apply(slots, |rule| {
            rule.insertion_filter = rule.insertion_filter.and(&filter);
        })
    }

    /// Only let stored stacks matching `filter` out (combined with earlier filters)
    pub fn filter_extractions(self, slots: Range<usize>, filter: Filter<S>) -> Result<Self> {
        self.apply(slots, |rule| {
            rule.extraction_filter = rule.extraction_filter.and(&filter);
        })
    }

    /// Cap each slot at `max` units
    pub fn limit_insertion_count(self, slots: Range<usize>, max: u32) -> Result<Self> {
        self.apply(slots, |rule| rule.max_count = Some(max))
    }

    /// Keep at least `min` units in each slot when extracting
    pub fn retain_minimum(self, slots: Range<usize>, min: u32) -> Result<Self> {
        self.apply(slots, |rule| rule.min_retained = min)
    }

    /// Refuse every insertion into the slots
    pub fn disallow_insertion(self, slots: Range<usize>) -> Result<Self> {
        self.apply(slots, |rule| rule.insert_allowed = false)
    }

    /// Refuse every extraction from the slots
    pub fn disallow_extraction(self, slots: Range<usize>) -> Result<Self> {
        self.apply(slots, |rule| rule.extract_allowed = false)
    }

    /// Freeze the rules
    pub fn build(self) -> Arc<LimitedFixedInv<S>> {
        Arc::new(LimitedFixedInv {
            inv: self.inv,
            rules: self.rules,
        })
    }
}

/// A fixed inventory whose slots obey extra rules
pub struct LimitedFixedInv<S: Stack> {
    inv: FixedInvRef<S>,
    rules: Vec<SlotLimit<S>>,
}

impl<S: Stack> LimitedFixedInv<S> {
    /// The rules for `slot`
    pub fn rule(&self, slot: usize) -> &SlotLimit<S> {
        error::assert_slot(slot, self.rules.len());
        &self.rules[slot]
    }

    /// Check a replacement of `current` by `to` against the slot's rules
    fn allows_change(&self, rule: &SlotLimit<S>, current: &S, to: &S) -> bool {
        match (current.is_empty(), to.is_empty()) {
            (true, true) => true,
            (true, false) => rule.allows_insertion(to, to.count()),
            (false, true) => rule.allows_extraction(current, 0),
            (false, false) if current.same_kind(to) => {
                if to.count() > current.count() {
                    rule.allows_insertion(to, to.count())
                } else if to.count() < current.count() {
                    rule.allows_extraction(current, to.count())
                } else {
                    true
                }
            }
            (false, false) => rule.allows_extraction(current, 0) && rule.allows_insertion(to, to.count()),
        }
    }
}

impl<S: Stack> FixedInvView<S> for LimitedFixedInv<S> {
    fn slot_count(&self) -> usize {
        self.inv.slot_count()
    }

    fn get_stack(&self, slot: usize) -> S {
        self.inv.get_stack(slot)
    }

    fn filter_for_slot(&self, slot: usize) -> Filter<S> {
        let rule = self.rule(slot);
        if !rule.insert_allowed {
            return Filter::Nothing;
        }
        self.inv.filter_for_slot(slot).and(&rule.insertion_filter)
    }

    fn is_valid_for_slot(&self, slot: usize, stack: &S) -> bool {
        let rule = self.rule(slot);
        rule.insert_allowed && rule.insertion_filter.matches(stack) && self.inv.is_valid_for_slot(slot, stack)
    }

    fn max_amount(&self, slot: usize, stack: &S) -> u32 {
        let parent = self.inv.max_amount(slot, stack);
        match self.rule(slot).max_count {
            Some(max) => parent.min(max),
            None => parent,
        }
    }

    fn storage_slot(&self, slot: usize) -> StorageSlot {
        self.inv.storage_slot(slot)
    }

    fn add_listener(
        &self,
        listener: SlotChangeListener<S>,
        removal: ListenerRemoval,
    ) -> Option<ListenerToken> {
        self.inv.add_listener(listener, removal)
    }
}

impl<S: Stack> FixedInv<S> for LimitedFixedInv<S> {
    fn set_stack(&self, slot: usize, to: S, simulation: Simulation) -> bool {
        let rule = self.rule(slot);
        let current = self.inv.get_stack(slot);
        if !self.allows_change(rule, &current, &to) {
            return false;
        }
        self.inv.set_stack(slot, to, simulation)
    }

    fn insert_stack(&self, slot: usize, stack: &S, simulation: Simulation) -> S {
        let rule = self.rule(slot);
        if !rule.insert_allowed || !rule.insertion_filter.matches(stack) {
            return stack.clone();
        }
        // Capacity is clamped through our own max_amount
        transfer::insert_stack(self, slot, stack, simulation)
    }

    fn extract_stack(
        &self,
        slot: usize,
        filter: Option<&Filter<S>>,
        merge_with: S,
        max_count: u32,
        simulation: Simulation,
    ) -> S {
        let rule = self.rule(slot);
        let current = self.inv.get_stack(slot);
        if current.is_empty() || !rule.extract_allowed || !rule.extraction_filter.matches(&current) {
            return merge_with;
        }

        let max_count = max_count.min(current.count().saturating_sub(rule.min_retained));
        if max_count == 0 {
            return merge_with;
        }
        transfer::extract_stack(self, slot, filter, merge_with, max_count, simulation)
    }
}
