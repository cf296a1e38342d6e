//! Zero-capacity inventories and transferables
//!
//! These satisfy every contract trivially. The `Null` variants stand for "no
//! inventory here" and should be treated like an absent attribute; the other
//! variants are valid objects that simply never move anything.

use crate::filter::Filter;
use crate::fixed::{FixedInv, FixedInvRef};
use crate::grouped::{Extractable, Insertable};
use crate::listener::{ListenerRemoval, ListenerToken, SlotChangeListener};
use crate::simulation::Simulation;
use crate::stack::Stack;
use crate::view::FixedInvView;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Marker for objects that stand in for "nothing here"
pub trait NullVariant {
    /// Check if this value means "no attribute" rather than "empty attribute"
    fn is_null_variant(&self) -> bool;
}

/// One shared empty inventory per stack type, created on first use
static SHARED_EMPTY: OnceLock<Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>> = OnceLock::new();

/// An inventory with no slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyFixedInv;

impl EmptyFixedInv {
    /// The process-wide empty inventory for stacks of type `S`.
    ///
    /// Every call returns a handle to the same allocation.
    pub fn shared<S: Stack>() -> FixedInvRef<S> {
        let mut registry = SHARED_EMPTY.get_or_init(Default::default).lock();
        let entry = registry.entry(TypeId::of::<S>()).or_insert_with(|| {
            let inv: FixedInvRef<S> = Arc::new(EmptyFixedInv);
            let boxed: Box<dyn Any + Send + Sync> = Box::new(inv);
            boxed
        });
        match entry.downcast_ref::<FixedInvRef<S>>() {
            Some(inv) => Arc::clone(inv),
            None => unreachable!("shared empty inventories are keyed by their stack type"),
        }
    }

    /// Check if `inv` is the shared empty inventory
    pub fn is_shared<S: Stack>(inv: &FixedInvRef<S>) -> bool {
        Arc::ptr_eq(inv, &Self::shared())
    }
}

impl<S: Stack> FixedInvView<S> for EmptyFixedInv {
    fn slot_count(&self) -> usize {
        0
    }

    fn get_stack(&self, slot: usize) -> S {
        crate::error::assert_slot(slot, 0);
        S::empty()
    }

    fn filter_for_slot(&self, slot: usize) -> Filter<S> {
        crate::error::assert_slot(slot, 0);
        Filter::Nothing
    }

    fn is_valid_for_slot(&self, slot: usize, _stack: &S) -> bool {
        crate::error::assert_slot(slot, 0);
        false
    }

    fn max_amount(&self, slot: usize, _stack: &S) -> u32 {
        crate::error::assert_slot(slot, 0);
        0
    }

    fn add_listener(
        &self,
        _listener: SlotChangeListener<S>,
        removal: ListenerRemoval,
    ) -> Option<ListenerToken> {
        // Nothing ever changes, so the listener is simply never called
        Some(ListenerToken::new(removal))
    }
}

impl<S: Stack> FixedInv<S> for EmptyFixedInv {
    fn set_stack(&self, slot: usize, _to: S, _simulation: Simulation) -> bool {
        crate::error::assert_slot(slot, 0);
        false
    }
}

/// A transferable that never accepts nor hands out anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyTransferable {
    /// Treat as if there were no transferable at all
    Null,
    /// Interacts with neighbouring inventories but exposes nothing itself
    Controller,
}

impl EmptyTransferable {
    /// The insertion half
    pub fn pure_insertable(self) -> RejectingInsertable {
        match self {
            EmptyTransferable::Null => RejectingInsertable::Null,
            EmptyTransferable::Controller => RejectingInsertable::Extractor,
        }
    }

    /// The extraction half
    pub fn pure_extractable(self) -> EmptyExtractable {
        match self {
            EmptyTransferable::Null => EmptyExtractable::Null,
            EmptyTransferable::Controller => EmptyExtractable::Supplier,
        }
    }
}

impl NullVariant for EmptyTransferable {
    fn is_null_variant(&self) -> bool {
        *self == EmptyTransferable::Null
    }
}

impl fmt::Display for EmptyTransferable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyTransferable::Null => write!(f, "EmptyTransferable.NULL"),
            EmptyTransferable::Controller => write!(f, "EmptyTransferable.CONTROLLER"),
        }
    }
}

impl<S: Stack> Insertable<S> for EmptyTransferable {
    fn attempt_insertion(&self, stack: &S, _simulation: Simulation) -> S {
        stack.clone()
    }

    fn insertion_filter(&self) -> Filter<S> {
        Filter::Nothing
    }
}

impl<S: Stack> Extractable<S> for EmptyTransferable {
    fn attempt_extraction(&self, _filter: &Filter<S>, _max_amount: u32, _simulation: Simulation) -> S {
        S::empty()
    }
}

/// An insertable that refuses everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectingInsertable {
    /// Treat as if there were no insertable at all
    Null,
    /// Refuses insertion because the owner only ever extracts
    Extractor,
}

impl NullVariant for RejectingInsertable {
    fn is_null_variant(&self) -> bool {
        *self == RejectingInsertable::Null
    }
}

impl fmt::Display for RejectingInsertable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectingInsertable::Null => write!(f, "RejectingInsertable.NULL"),
            RejectingInsertable::Extractor => write!(f, "RejectingInsertable.EXTRACTOR"),
        }
    }
}

impl<S: Stack> Insertable<S> for RejectingInsertable {
    fn attempt_insertion(&self, stack: &S, _simulation: Simulation) -> S {
        stack.clone()
    }

    fn insertion_filter(&self) -> Filter<S> {
        Filter::Nothing
    }
}

/// An extractable that never has anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyExtractable {
    /// Treat as if there were no extractable at all
    Null,
    /// Nothing to extract because the owner only ever inserts
    Supplier,
}

impl NullVariant for EmptyExtractable {
    fn is_null_variant(&self) -> bool {
        *self == EmptyExtractable::Null
    }
}

impl fmt::Display for EmptyExtractable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyExtractable::Null => write!(f, "EmptyExtractable.NULL"),
            EmptyExtractable::Supplier => write!(f, "EmptyExtractable.SUPPLIER"),
        }
    }
}

impl<S: Stack> Extractable<S> for EmptyExtractable {
    fn attempt_extraction(&self, _filter: &Filter<S>, _max_amount: u32, _simulation: Simulation) -> S {
        S::empty()
    }
}
