//! Void Inventory - Item stacks and item inventories
//!
//! Items plug into the generic slot machinery of `void_attributes`:
//! every decorator, transfer algorithm and listener works on item
//! inventories unchanged.
//!
//! # Features
//!
//! - Item stacks with per-instance properties
//! - Item filters by id, id set or exact stack
//! - Slot-array item inventories with per-slot filters and capacities
//! - Item-centric lookups and bulk add/remove
//!
//! # Example
//!
//! ```ignore
//! use void_inventory::prelude::*;
//!
//! let inventory = item_inventory(20);
//! let leftover = inventory.add_item(&ItemStack::new("iron_ingot", 12), Simulation::Action);
//! assert!(leftover.is_empty());
//! ```

pub mod filter;
pub mod inventory;
pub mod item;

pub mod prelude {
    pub use crate::filter::{exact_stack, item_id, item_ids, ItemFilter};
    pub use crate::inventory::{
        insert_anywhere, item_inventory, FixedItemInv, GroupedItemInv, ItemInvExt, SimpleFixedItemInv,
    };
    pub use crate::item::{ItemProperty, ItemStack, DEFAULT_MAX_STACK};
    pub use void_attributes::prelude::*;
}

pub use prelude::*;
