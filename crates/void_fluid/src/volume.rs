//! Fluid keys and volumes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use void_attributes::stack::Stack;

/// Units in one bucket of fluid
pub const BUCKET: u32 = 1000;

/// Units in one bottle of fluid
pub const BOTTLE: u32 = BUCKET / 3;

/// Identifies a kind of fluid. Two volumes with equal keys can merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FluidKey {
    /// Fluid ID
    pub id: String,
    /// Extra data that tells otherwise identical fluids apart
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl FluidKey {
    /// Create a key for `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: BTreeMap::new(),
        }
    }

    /// The key of no fluid
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Set a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Check if this is the key of no fluid
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// A volume of this fluid
    pub fn with_amount(&self, amount: u32) -> FluidVolume {
        FluidVolume::new(self.clone(), amount)
    }
}

impl fmt::Display for FluidKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(f, "{}", self.id)
        }
    }
}

/// An amount of one fluid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidVolume {
    /// Which fluid
    pub fluid: FluidKey,
    /// How much of it
    pub amount: u32,
}

impl FluidVolume {
    /// Create a volume of `amount` units of `fluid`
    pub fn new(fluid: FluidKey, amount: u32) -> Self {
        Self { fluid, amount }
    }

    /// Whole buckets of `fluid`
    pub fn buckets(fluid: FluidKey, buckets: u32) -> Self {
        Self::new(fluid, buckets.saturating_mul(BUCKET))
    }

    /// The empty volume
    pub fn empty() -> Self {
        Self::new(FluidKey::empty(), 0)
    }

    /// Check if there is no fluid here
    pub fn is_empty(&self) -> bool {
        self.amount == 0 || self.fluid.is_empty()
    }
}

impl Stack for FluidVolume {
    fn empty() -> Self {
        FluidVolume::empty()
    }

    fn count(&self) -> u32 {
        if self.fluid.is_empty() {
            0
        } else {
            self.amount
        }
    }

    fn set_count(&mut self, count: u32) {
        self.amount = count;
    }

    fn same_kind(&self, other: &Self) -> bool {
        self.fluid == other.fluid
    }

    fn is_empty(&self) -> bool {
        FluidVolume::is_empty(self)
    }
}

impl Default for FluidVolume {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for FluidVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        if self.amount % BUCKET == 0 {
            write!(f, "{} bucket(s) of {}", self.amount / BUCKET, self.fluid)
        } else {
            write!(f, "{} units of {}", self.amount, self.fluid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets() {
        let water = FluidKey::new("water");
        let volume = FluidVolume::buckets(water.clone(), 3);

        assert_eq!(volume.amount, 3000);
        assert_eq!(volume.count(), 3000);
        assert_eq!(volume.to_string(), "3 bucket(s) of water");
        assert_eq!(water.with_amount(250).to_string(), "250 units of water");
    }

    #[test]
    fn test_same_kind_uses_properties() {
        let plain = FluidKey::new("potion").with_amount(BOTTLE);
        let healing = FluidKey::new("potion")
            .with_property("effect", "healing")
            .with_amount(BOTTLE);

        assert!(!plain.same_kind(&healing));
        assert!(plain.same_kind(&FluidKey::new("potion").with_amount(1)));
    }

    #[test]
    fn test_empty() {
        assert!(FluidVolume::empty().is_empty());
        assert!(FluidKey::new("lava").with_amount(0).is_empty());
        assert_eq!(FluidKey::empty().with_amount(10).count(), 0);
    }

    #[test]
    fn test_split() {
        let mut lava = FluidVolume::buckets(FluidKey::new("lava"), 2);
        let taken = lava.split(BUCKET / 2);

        assert_eq!(taken.amount, 500);
        assert_eq!(lava.amount, 1500);
        assert!(taken.same_kind(&lava));
    }
}
