//! Void Fluid - Fluid volumes and tanks
//!
//! Fluids reuse the slot inventory machinery of `void_attributes`. A
//! [`FluidVolume`] is the stack type; tanks are slots with an explicit
//! capacity in units, where one bucket is [`BUCKET`] units.
//!
//! # Example
//!
//! ```ignore
//! use void_fluid::prelude::*;
//!
//! let tanks = fluid_tanks(2, 8 * BUCKET);
//! let water = FluidKey::new("water");
//! tanks.fill(&FluidVolume::buckets(water.clone(), 3), Simulation::Action);
//! ```

pub mod filter;
pub mod tank;
pub mod volume;

pub mod prelude {
    pub use crate::filter::{exact_fluid, fluid_set, FluidFilter, InvertedFluidFilter};
    pub use crate::tank::{
        fluid_tanks, EmptyFluidTransferable, FixedFluidInv, FluidTankExt, GroupedFluidInv,
        SimpleFixedFluidInv,
    };
    pub use crate::volume::{FluidKey, FluidVolume, BOTTLE, BUCKET};
    pub use void_attributes::prelude::*;
}

pub use prelude::*;
