//! # void_attributes - Slot inventories for Void Engine
//!
//! Stack-agnostic inventory plumbing shared by item and fluid storage:
//! - **Fixed inventories**: a stable number of slots, each addressable by index
//! - **Grouped inventories**: slot-agnostic insertion, extraction and totals
//! - **Decorators**: combined, sub-range, mapped, rule-limited and read-only
//!   views that share storage with the inventory they wrap
//!
//! Every mutating call takes a [`Simulation`] flag. Simulating reports the
//! outcome without any observable change, so callers can negotiate a
//! transfer before committing to it.
//!
//! ## Example
//!
//! ```ignore
//! use void_attributes::prelude::*;
//!
//! let inv: FixedInvRef<MyStack> = Arc::new(SimpleFixedInv::new(9));
//! let hotbar = inv.sub_inv(0, 3)?;
//! let leftover = inv.insertable().attempt_insertion(&stack, Simulation::Action);
//! ```

pub mod combined;
pub mod empty;
pub mod error;
pub mod filter;
pub mod fixed;
pub mod grouped;
pub mod grouped_wrapper;
pub mod limited;
pub mod listener;
pub mod mapped;
pub mod simple;
pub mod simulation;
pub mod slot;
pub mod stack;
pub mod sub;
pub mod transfer;
pub mod view;

pub use prelude::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::combined::CombinedFixedInv;
    pub use crate::empty::{EmptyExtractable, EmptyFixedInv, EmptyTransferable, NullVariant, RejectingInsertable};
    pub use crate::error::{InvError, Result};
    pub use crate::filter::{Filter, InvertedFilter, StackFilter};
    pub use crate::fixed::{FixedInv, FixedInvExt, FixedInvRef, ReadOnlyFixedInv, Slots};
    pub use crate::grouped::{Extractable, GroupedInv, GroupedInvView, Insertable, InvStatistic, Transferable};
    pub use crate::grouped_wrapper::GroupedInvFixedWrapper;
    pub use crate::limited::{LimitedFixedInv, LimitedFixedInvBuilder, SlotLimit};
    pub use crate::listener::{InvChangeListener, ListenerRegistry, ListenerRemoval, ListenerToken, SlotChangeListener};
    pub use crate::mapped::MappedFixedInv;
    pub use crate::simple::SimpleFixedInv;
    pub use crate::simulation::Simulation;
    pub use crate::slot::SingleSlot;
    pub use crate::stack::Stack;
    pub use crate::sub::SubFixedInv;
    pub use crate::transfer::move_stacks;
    pub use crate::view::{FixedInvView, StorageSlot};
}
