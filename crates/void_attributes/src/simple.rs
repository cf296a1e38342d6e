//! Plain slot-array inventory

use crate::error;
use crate::filter::Filter;
use crate::fixed::FixedInv;
use crate::listener::{ListenerRegistry, ListenerRemoval, ListenerToken, SlotChangeListener};
use crate::simulation::Simulation;
use crate::stack::Stack;
use crate::view::FixedInvView;
use parking_lot::Mutex;

/// A fixed inventory backed by a vector of stacks.
///
/// Every slot has a filter and an optional capacity. Without a capacity a
/// slot holds up to the stack's own `max_count`.
pub struct SimpleFixedInv<S: Stack> {
    slots: Mutex<Vec<S>>,
    filters: Vec<Filter<S>>,
    capacities: Vec<Option<u32>>,
    listeners: ListenerRegistry<S>,
}

impl<S: Stack> SimpleFixedInv<S> {
    /// Create an inventory with `slot_count` empty, unrestricted slots
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: Mutex::new(vec![S::empty(); slot_count]),
            filters: vec![Filter::Everything; slot_count],
            capacities: vec![None; slot_count],
            listeners: ListenerRegistry::new(),
        }
    }

    /// Cap every slot at `max` units
    pub fn with_max_amount(mut self, max: u32) -> Self {
        self.capacities.iter_mut().for_each(|cap| *cap = Some(max));
        self
    }

    /// Cap one slot at `max` units
    pub fn with_slot_max_amount(mut self, slot: usize, max: u32) -> Self {
        error::assert_slot(slot, self.capacities.len());
        self.capacities[slot] = Some(max);
        self
    }

    /// Only accept stacks matching `filter` in every slot
    pub fn with_filter(mut self, filter: Filter<S>) -> Self {
        self.filters.iter_mut().for_each(|f| *f = filter.clone());
        self
    }

    /// Only accept stacks matching `filter` in one slot
    pub fn with_slot_filter(mut self, slot: usize, filter: Filter<S>) -> Self {
        error::assert_slot(slot, self.filters.len());
        self.filters[slot] = filter;
        self
    }

    /// Copy of every slot, in order
    pub fn stacks(&self) -> Vec<S> {
        self.slots.lock().clone()
    }

    /// Number of slots holding something
    pub fn used_slots(&self) -> usize {
        self.slots.lock().iter().filter(|s| !s.is_empty()).count()
    }

    /// Check if every slot is empty
    pub fn is_empty(&self) -> bool {
        self.used_slots() == 0
    }

    /// Drop every listener, running their removal callbacks.
    ///
    /// Owners call this when the inventory goes away for good.
    pub fn invalidate_listeners(&self) {
        self.listeners.invalidate();
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<S: Stack> FixedInvView<S> for SimpleFixedInv<S> {
    fn slot_count(&self) -> usize {
        self.filters.len()
    }

    fn get_stack(&self, slot: usize) -> S {
        let slots = self.slots.lock();
        error::assert_slot(slot, slots.len());
        slots[slot].clone()
    }

    fn filter_for_slot(&self, slot: usize) -> Filter<S> {
        error::assert_slot(slot, self.filters.len());
        self.filters[slot].clone()
    }

    fn max_amount(&self, slot: usize, stack: &S) -> u32 {
        error::assert_slot(slot, self.capacities.len());
        self.capacities[slot].unwrap_or_else(|| stack.max_count())
    }

    fn add_listener(
        &self,
        listener: SlotChangeListener<S>,
        removal: ListenerRemoval,
    ) -> Option<ListenerToken> {
        Some(self.listeners.add(listener, removal))
    }
}

impl<S: Stack> FixedInv<S> for SimpleFixedInv<S> {
    fn set_stack(&self, slot: usize, to: S, simulation: Simulation) -> bool {
        error::assert_slot(slot, self.filters.len());
        let to = if to.is_empty() { S::empty() } else { to };
        if !to.is_empty() && (!self.is_valid_for_slot(slot, &to) || to.count() > self.max_amount(slot, &to)) {
            return false;
        }
        if simulation.is_simulate() {
            return true;
        }

        let before = {
            let mut slots = self.slots.lock();
            std::mem::replace(&mut slots[slot], to.clone())
        };
        log::trace!("Slot {} changed from {:?} to {:?}", slot, before, to);
        self.listeners.fire(slot, &before, &to);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::test_stack::Pile;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_set_and_get() {
        let inv = SimpleFixedInv::new(2);
        assert!(inv.set_stack(1, Pile::new("clay", 5), Simulation::Action));
        assert_eq!(inv.get_stack(1), Pile::new("clay", 5));
        assert!(inv.get_stack(0).is_empty());
        assert_eq!(inv.used_slots(), 1);
    }

    #[test]
    fn test_simulate_changes_nothing() {
        let inv = SimpleFixedInv::new(1);
        assert!(inv.set_stack(0, Pile::new("clay", 5), Simulation::Simulate));
        assert!(inv.is_empty());
    }

    #[test]
    fn test_capacity_and_filter() {
        let inv = SimpleFixedInv::new(2)
            .with_max_amount(10)
            .with_slot_filter(1, Filter::custom(|p: &Pile| p.kind == "clay"));

        assert!(!inv.set_stack(0, Pile::new("clay", 11), Simulation::Action));
        assert!(inv.set_stack(0, Pile::new("clay", 10), Simulation::Action));
        assert!(!inv.set_stack(1, Pile::new("sand", 1), Simulation::Action));
        assert!(inv.set_stack(1, Pile::new("clay", 1), Simulation::Action));

        // Empty stacks always fit
        assert!(inv.set_stack(1, Pile::empty(), Simulation::Action));
    }

    #[test]
    fn test_default_capacity_is_stack_max() {
        let inv = SimpleFixedInv::new(1);
        assert_eq!(inv.max_amount(0, &Pile::new("clay", 1)), 64);
        assert!(!inv.set_stack(0, Pile::new("clay", 65), Simulation::Action));
    }

    #[test]
    fn test_listeners_fire_on_action_only() {
        let inv = SimpleFixedInv::new(1);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let token = inv
            .add_listener(
                Arc::new(move |slot: usize, before: &Pile, after: &Pile| {
                    assert_eq!(slot, 0);
                    assert!(before.is_empty());
                    assert_eq!(after.count, 3);
                    calls_clone.fetch_add(1, Ordering::SeqCst);
                }),
                Box::new(|| {}),
            )
            .expect("simple inventories support listeners");

        inv.set_stack(0, Pile::new("clay", 3), Simulation::Simulate);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        inv.set_stack(0, Pile::new("clay", 3), Simulation::Action);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        token.remove();
        assert_eq!(inv.listener_count(), 0);
    }

    #[test]
    fn test_invalidate_listeners() {
        let inv: SimpleFixedInv<Pile> = SimpleFixedInv::new(1);
        let removed = Arc::new(AtomicUsize::new(0));
        let removed_clone = removed.clone();
        let _token = inv.add_listener(
            Arc::new(|_: usize, _: &Pile, _: &Pile| {}),
            Box::new(move || {
                removed_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        inv.invalidate_listeners();
        assert_eq!(removed.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        let inv: SimpleFixedInv<Pile> = SimpleFixedInv::new(1);
        inv.get_stack(1);
    }
}
