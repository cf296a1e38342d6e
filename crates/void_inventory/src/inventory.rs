//! Item inventories
//!
//! Item storage is the generic slot machinery from `void_attributes`
//! specialised to [`ItemStack`], plus a few item-centric conveniences.

use crate::filter::{self, ItemFilter};
use crate::item::ItemStack;
use std::sync::Arc;
use void_attributes::fixed::{FixedInv, FixedInvExt, FixedInvRef};
use void_attributes::grouped::{GroupedInv, GroupedInvView, Insertable};
use void_attributes::simple::SimpleFixedInv;
use void_attributes::simulation::Simulation;
use void_attributes::stack::Stack;
use void_attributes::view::FixedInvView;

/// Shared handle to a fixed item inventory
pub type FixedItemInv = FixedInvRef<ItemStack>;

/// Shared handle to a grouped item inventory
pub type GroupedItemInv = Arc<dyn GroupedInv<ItemStack>>;

/// Slot-array item inventory
pub type SimpleFixedItemInv = SimpleFixedInv<ItemStack>;

/// Create an item inventory with `slot_count` empty slots, each holding up
/// to a full stack of whatever goes in
pub fn item_inventory(slot_count: usize) -> FixedItemInv {
    Arc::new(SimpleFixedItemInv::new(slot_count))
}

/// Item-centric queries and bulk operations on a fixed item inventory
pub trait ItemInvExt {
    /// First slot holding `item_id`
    fn find_item(&self, item_id: &str) -> Option<usize>;

    /// Every slot holding `item_id`, ascending
    fn find_all_items(&self, item_id: &str) -> Vec<usize>;

    /// First empty slot
    fn find_empty_slot(&self) -> Option<usize>;

    /// Total quantity of `item_id` across every slot
    fn count_item(&self, item_id: &str) -> u64;

    /// Add `stack`, topping up matching stacks before using empty slots.
    /// Returns whatever did not fit.
    fn add_item(&self, stack: &ItemStack, simulation: Simulation) -> ItemStack;

    /// Remove up to `amount` of `item_id`, returning how many were removed
    fn remove_item(&self, item_id: &str, amount: u32, simulation: Simulation) -> u32;

    /// Exchange the contents of two slots. Nothing changes unless both
    /// slots accept their new stack.
    fn swap_slots(&self, slot_a: usize, slot_b: usize) -> bool;
}

impl ItemInvExt for FixedItemInv {
    fn find_item(&self, item_id: &str) -> Option<usize> {
        (0..self.slot_count()).find(|&slot| self.get_stack(slot).is_item(item_id))
    }

    fn find_all_items(&self, item_id: &str) -> Vec<usize> {
        (0..self.slot_count())
            .filter(|&slot| self.get_stack(slot).is_item(item_id))
            .collect()
    }

    fn find_empty_slot(&self) -> Option<usize> {
        (0..self.slot_count()).find(|&slot| self.get_stack(slot).is_empty())
    }

    fn count_item(&self, item_id: &str) -> u64 {
        self.grouped()
            .statistics(&filter::item_id(item_id))
            .amount
    }

    fn add_item(&self, stack: &ItemStack, simulation: Simulation) -> ItemStack {
        if stack.is_empty() {
            return ItemStack::empty();
        }

        // Top up matching stacks first, then fill empty slots
        let mut remainder = stack.clone();
        for slot in 0..self.slot_count() {
            if remainder.is_empty() {
                return ItemStack::empty();
            }
            let current = self.get_stack(slot);
            if !current.is_empty() && current.same_kind(&remainder) {
                remainder = self.insert_stack(slot, &remainder, simulation);
            }
        }

        for slot in 0..self.slot_count() {
            if remainder.is_empty() {
                break;
            }
            if self.get_stack(slot).is_empty() {
                remainder = self.insert_stack(slot, &remainder, simulation);
            }
        }

        if !remainder.is_empty() {
            log::debug!("Inventory full, {} left over", remainder);
        }
        remainder
    }

    fn remove_item(&self, item_id: &str, amount: u32, simulation: Simulation) -> u32 {
        let filter: ItemFilter = filter::item_id(item_id);
        let mut removed = 0;
        for slot in 0..self.slot_count() {
            let remaining = amount - removed;
            if remaining == 0 {
                break;
            }
            let taken = self.extract_stack(slot, Some(&filter), ItemStack::empty(), remaining, simulation);
            removed += taken.count();
        }
        removed
    }

    fn swap_slots(&self, slot_a: usize, slot_b: usize) -> bool {
        let a = self.get_stack(slot_a);
        let b = self.get_stack(slot_b);
        if !self.set_stack(slot_a, b.clone(), Simulation::Simulate)
            || !self.set_stack(slot_b, a.clone(), Simulation::Simulate)
        {
            return false;
        }
        self.set_stack(slot_a, b, Simulation::Action) && self.set_stack(slot_b, a, Simulation::Action)
    }
}

/// Add `stack` through the slot-agnostic insertion path
pub fn insert_anywhere(inv: &FixedItemInv, stack: &ItemStack, simulation: Simulation) -> ItemStack {
    inv.insertable().attempt_insertion(stack, simulation)
}
