//! Item filters

use crate::item::ItemStack;
use std::collections::HashSet;
use void_attributes::filter::Filter;
use void_attributes::stack::Stack;

/// Filter over item stacks
pub type ItemFilter = Filter<ItemStack>;

/// Matches stacks that could merge with `stack` (same item and instance data)
pub fn exact_stack(stack: &ItemStack) -> ItemFilter {
    if stack.is_empty() {
        return Filter::Nothing;
    }
    let stack = stack.clone();
    Filter::custom(move |other: &ItemStack| !other.is_empty() && stack.same_kind(other))
}

/// Matches any stack of `item_id`, whatever its instance data
pub fn item_id(item_id: impl Into<String>) -> ItemFilter {
    let item_id = item_id.into();
    Filter::custom(move |stack: &ItemStack| stack.is_item(&item_id))
}

/// Matches stacks of any of the given items
pub fn item_ids<I, T>(ids: I) -> ItemFilter
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let ids: HashSet<String> = ids.into_iter().map(Into::into).collect();
    match ids.len() {
        0 => Filter::Nothing,
        _ => Filter::custom(move |stack: &ItemStack| !stack.is_empty() && ids.contains(&stack.item_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemProperty;

    #[test]
    fn test_exact_stack() {
        let plain = ItemStack::new("gold", 3);
        let filter = exact_stack(&plain);

        assert!(filter.matches(&ItemStack::new("gold", 60)));
        assert!(!filter.matches(&ItemStack::new("gold", 1).with_data("cursed", ItemProperty::Bool(true))));
        assert!(!filter.matches(&ItemStack::empty()));
        assert!(exact_stack(&ItemStack::empty()).is_nothing());
    }

    #[test]
    fn test_item_id() {
        let filter = item_id("sword");
        assert!(filter.matches(&ItemStack::single("sword").with_durability(1.0, 10.0)));
        assert!(!filter.matches(&ItemStack::single("shield")));
    }

    #[test]
    fn test_item_ids() {
        let filter = item_ids(["coal", "charcoal"]);
        assert!(filter.matches(&ItemStack::new("coal", 4)));
        assert!(filter.matches(&ItemStack::new("charcoal", 4)));
        assert!(!filter.matches(&ItemStack::new("wood", 4)));
        assert!(item_ids(Vec::<String>::new()).is_nothing());

        let not_fuel = filter.negate();
        assert!(not_fuel.matches(&ItemStack::new("wood", 4)));
        assert!(not_fuel.negate().same(&filter));
    }
}
