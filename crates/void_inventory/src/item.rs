//! Item stacks

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use void_attributes::stack::Stack;

/// Stack size used when an item does not say otherwise
pub const DEFAULT_MAX_STACK: u32 = 64;

fn default_max_stack() -> u32 {
    DEFAULT_MAX_STACK
}

/// Item property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemProperty {
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<ItemProperty>),
}

impl ItemProperty {
    /// Get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

/// A quantity of one item, plus the per-instance data that keeps it from
/// merging with other stacks of the same item. Stacks that disagree on
/// `max_stack` never merge either.
///
/// A stack with no item or a zero quantity is empty; every empty stack is
/// interchangeable with [`ItemStack::empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item ID
    pub item_id: String,
    /// Quantity
    pub quantity: u32,
    /// Most items a single stack may hold
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    /// Instance-specific properties (durability, enchantments, etc.)
    #[serde(default)]
    pub instance_data: BTreeMap<String, ItemProperty>,
}

impl ItemStack {
    /// Create a new item stack
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            max_stack: DEFAULT_MAX_STACK,
            instance_data: BTreeMap::new(),
        }
    }

    /// Create a single item
    pub fn single(item_id: impl Into<String>) -> Self {
        Self::new(item_id, 1)
    }

    /// The empty stack
    pub fn empty() -> Self {
        Self::new(String::new(), 0)
    }

    /// Set max stack size
    pub fn with_max_stack(mut self, max: u32) -> Self {
        self.max_stack = max.max(1);
        self
    }

    /// Set instance data
    pub fn with_data(mut self, key: impl Into<String>, value: ItemProperty) -> Self {
        self.instance_data.insert(key.into(), value);
        self
    }

    /// Set durability
    pub fn with_durability(self, current: f32, max: f32) -> Self {
        self.with_data("durability", ItemProperty::Float(current as f64))
            .with_data("max_durability", ItemProperty::Float(max as f64))
    }

    /// Get durability (current, max)
    pub fn durability(&self) -> Option<(f32, f32)> {
        let current = self.instance_data.get("durability")?.as_float()? as f32;
        let max = self.instance_data.get("max_durability")?.as_float()? as f32;
        Some((current, max))
    }

    /// Get an instance property
    pub fn data(&self, key: &str) -> Option<&ItemProperty> {
        self.instance_data.get(key)
    }

    /// Check if this stack is empty
    pub fn is_empty(&self) -> bool {
        self.quantity == 0 || self.item_id.is_empty()
    }

    /// Check if this stack holds `item_id`
    pub fn is_item(&self, item_id: &str) -> bool {
        !self.is_empty() && self.item_id == item_id
    }
}

impl Stack for ItemStack {
    fn empty() -> Self {
        ItemStack::empty()
    }

    fn count(&self) -> u32 {
        if self.item_id.is_empty() {
            0
        } else {
            self.quantity
        }
    }

    fn set_count(&mut self, count: u32) {
        self.quantity = count;
    }

    fn same_kind(&self, other: &Self) -> bool {
        self.item_id == other.item_id
            && self.max_stack == other.max_stack
            && self.instance_data == other.instance_data
    }

    fn is_empty(&self) -> bool {
        ItemStack::is_empty(self)
    }

    fn max_count(&self) -> u32 {
        self.max_stack
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        write!(f, "{}x {}", self.quantity, self.item_id)?;
        if !self.instance_data.is_empty() {
            write!(f, " (+{} data)", self.instance_data.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_stack() {
        let mut stack = ItemStack::new("gold_coin", 50).with_max_stack(99);

        assert_eq!(stack.count(), 50);
        assert_eq!(stack.max_count(), 99);

        stack.increment(60);
        assert_eq!(stack.quantity, 110);

        stack.decrement(200);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_split() {
        let mut stack = ItemStack::new("arrows", 50);

        let split = stack.split(20);
        assert_eq!(stack.quantity, 30);
        assert_eq!(split.quantity, 20);
        assert_eq!(split.item_id, "arrows");
    }

    #[test]
    fn test_same_kind_ignores_quantity() {
        let a = ItemStack::new("gold", 30);
        let b = ItemStack::new("gold", 40);
        let named = ItemStack::new("gold", 1).with_data("name", ItemProperty::String("Lucky".into()));

        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&named));
        assert!(!a.same_kind(&ItemStack::new("silver", 30)));
        assert!(!a.same_kind(&ItemStack::new("gold", 30).with_max_stack(16)));
    }

    #[test]
    fn test_empty() {
        assert!(ItemStack::empty().is_empty());
        assert!(ItemStack::new("stone", 0).is_empty());
        assert!(ItemStack::new("", 5).is_empty());
        assert_eq!(ItemStack::new("", 5).count(), 0);
        assert_eq!(ItemStack::default(), ItemStack::empty());
    }

    #[test]
    fn test_durability() {
        let stack = ItemStack::single("sword").with_durability(80.0, 100.0);

        let (current, max) = stack.durability().unwrap();
        assert_eq!(current, 80.0);
        assert_eq!(max, 100.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(ItemStack::new("stone", 3).to_string(), "3x stone");
        assert_eq!(ItemStack::empty().to_string(), "empty");
        assert_eq!(
            ItemStack::single("sword").with_durability(1.0, 2.0).to_string(),
            "1x sword (+2 data)"
        );
    }
}
