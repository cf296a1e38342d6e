//! Fluid tanks
//!
//! A tank is a slot; a multi-tank is a fixed fluid inventory. Unlike items,
//! fluid volumes carry no capacity of their own, so every tank is built with
//! an explicit one.

use crate::filter::FluidFilter;
use crate::volume::FluidVolume;
use std::sync::Arc;
use void_attributes::empty::EmptyTransferable;
use void_attributes::fixed::{FixedInvExt, FixedInvRef};
use void_attributes::grouped::{Extractable, GroupedInv, Insertable};
use void_attributes::simple::SimpleFixedInv;
use void_attributes::simulation::Simulation;
use void_attributes::view::FixedInvView;

/// Shared handle to a fixed fluid inventory
pub type FixedFluidInv = FixedInvRef<FluidVolume>;

/// Shared handle to a grouped fluid inventory
pub type GroupedFluidInv = Arc<dyn GroupedInv<FluidVolume>>;

/// Tank-array fluid inventory
pub type SimpleFixedFluidInv = SimpleFixedInv<FluidVolume>;

/// Fluid transferable that never moves anything
pub type EmptyFluidTransferable = EmptyTransferable;

/// Create `tank_count` empty tanks holding `capacity` units each
pub fn fluid_tanks(tank_count: usize, capacity: u32) -> FixedFluidInv {
    Arc::new(SimpleFixedFluidInv::new(tank_count).with_max_amount(capacity))
}

/// Tank-style filling and draining
pub trait FluidTankExt {
    /// Fill tanks in order, returning whatever did not fit
    fn fill(&self, volume: &FluidVolume, simulation: Simulation) -> FluidVolume;

    /// Drain up to `max_amount` units of a single fluid matching `filter`
    fn drain(&self, filter: &FluidFilter, max_amount: u32, simulation: Simulation) -> FluidVolume;

    /// Total capacity of every tank for `fluid`
    fn total_capacity(&self, fluid: &FluidVolume) -> u64;
}

impl FluidTankExt for FixedFluidInv {
    fn fill(&self, volume: &FluidVolume, simulation: Simulation) -> FluidVolume {
        self.insertable().attempt_insertion(volume, simulation)
    }

    fn drain(&self, filter: &FluidFilter, max_amount: u32, simulation: Simulation) -> FluidVolume {
        self.extractable().attempt_extraction(filter, max_amount, simulation)
    }

    fn total_capacity(&self, fluid: &FluidVolume) -> u64 {
        (0..self.slot_count())
            .filter(|&tank| self.is_valid_for_slot(tank, fluid))
            .map(|tank| u64::from(self.max_amount(tank, fluid)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::exact_fluid;
    use crate::volume::{FluidKey, BUCKET};
    use void_attributes::filter::Filter;

    #[test]
    fn test_fill_and_drain() {
        let tanks = fluid_tanks(2, 4 * BUCKET);
        let water = FluidKey::new("water");

        let left = tanks.fill(&FluidVolume::buckets(water.clone(), 10), Simulation::Action);
        assert_eq!(left.amount, 2 * BUCKET);
        assert_eq!(tanks.get_stack(0).amount, 4 * BUCKET);
        assert_eq!(tanks.get_stack(1).amount, 4 * BUCKET);

        let drained = tanks.drain(&exact_fluid(&water), 5 * BUCKET, Simulation::Action);
        assert_eq!(drained, FluidVolume::buckets(water, 5));
        assert!(tanks.get_stack(0).is_empty());
        assert_eq!(tanks.get_stack(1).amount, 3 * BUCKET);
    }

    #[test]
    fn test_tanks_hold_one_fluid() {
        let tanks = fluid_tanks(1, BUCKET);
        tanks.fill(&FluidKey::new("water").with_amount(100), Simulation::Action);

        let lava = FluidKey::new("lava").with_amount(100);
        assert_eq!(tanks.fill(&lava, Simulation::Action), lava);
    }

    #[test]
    fn test_total_capacity() {
        let simple = SimpleFixedFluidInv::new(3)
            .with_max_amount(BUCKET)
            .with_slot_filter(2, Filter::Nothing);
        let tanks: FixedFluidInv = Arc::new(simple);

        assert_eq!(tanks.total_capacity(&FluidKey::new("water").with_amount(1)), 2000);
    }
}
