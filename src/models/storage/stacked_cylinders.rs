//! Liquid volume in a stack of coaxial cylinders.
//!
//! A [`StackedCylinders`] holds an ordered list of [`CylinderRecord`]s along
//! a vertical stacking axis. Each record is either a [`Role::Vessel`] that
//! holds liquid or a [`Role::Displacer`], a submerged solid whose volume is
//! taken away from the liquid.
//!
//! The model answers three questions:
//!
//! - how much liquid is held at a fill height ([`StackedCylinders::filled_volume`]),
//! - which fill height holds a given volume ([`StackedCylinders::fill_height`]),
//! - how far the stack extends ([`StackedCylinders::z_range`],
//!   [`StackedCylinders::radius_range`]).
//!
//! # Example
//!
//! ```
//! use tank_stack::models::storage::stacked_cylinders::StackedCylinders;
//! use tank_stack::support::units::LengthUnit;
//! use uom::si::volume::liter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut stack = StackedCylinders::new(LengthUnit::Inch);
//! stack.add_vessel(2.0, 10.0, None)?;
//! stack.add_displacer(1.0, 3.0, 2.0)?;
//!
//! let volume = stack.filled_volume(5.0);
//! assert!((volume.get::<liter>() - 0.8752).abs() < 1e-4);
//! # Ok(())
//! # }
//! ```

mod core;
mod fill_height;
mod model;

pub use self::core::{CylinderRecord, Extent, Role, StackError, StackedCylinders};
pub use fill_height::{FillHeightConfig, FillHeightError};
pub use model::{FillLevel, FilledVolume};
