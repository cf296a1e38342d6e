//! Fluid filters
//!
//! Inverted fluid filters are plain [`Filter::negate`]: negating twice hands
//! back the filter that was negated.

use crate::volume::{FluidKey, FluidVolume};
use std::collections::BTreeSet;
use void_attributes::filter::{Filter, InvertedFilter};

/// Filter over fluid volumes
pub type FluidFilter = Filter<FluidVolume>;

/// The negation of a fluid filter
pub type InvertedFluidFilter = InvertedFilter<FluidVolume>;

/// Matches volumes of exactly `fluid`
pub fn exact_fluid(fluid: &FluidKey) -> FluidFilter {
    if fluid.is_empty() {
        return Filter::Nothing;
    }
    let fluid = fluid.clone();
    Filter::custom(move |volume: &FluidVolume| !volume.is_empty() && volume.fluid == fluid)
}

/// Matches volumes of any fluid in `fluids`
pub fn fluid_set(fluids: impl IntoIterator<Item = FluidKey>) -> FluidFilter {
    let fluids: BTreeSet<FluidKey> = fluids.into_iter().filter(|f| !f.is_empty()).collect();
    match fluids.len() {
        0 => Filter::Nothing,
        1 => fluids.iter().next().map_or(Filter::Nothing, exact_fluid),
        _ => Filter::custom(move |volume: &FluidVolume| {
            !volume.is_empty() && fluids.contains(&volume.fluid)
        }),
    }
}
