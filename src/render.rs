//! Plot data and SVG output for tank stacks.
//!
//! Rendering is split in two steps. [`Schematic`] and [`VolumeCurve`] are
//! plain values built only from the query operations of
//! [`StackedCylinders`]; the [`svg`] module then draws them.
//!
//! ```
//! use tank_stack::models::storage::stacked_cylinders::StackedCylinders;
//! use tank_stack::render::{CurveConfig, Schematic, VolumeCurve, svg};
//! use tank_stack::support::units::LengthUnit;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut stack = StackedCylinders::new(LengthUnit::Inch);
//! stack.add_vessel(2.0, 10.0, None)?;
//! stack.add_displacer(1.0, 3.0, 2.0)?;
//!
//! let drawing = svg::schematic(&Schematic::new(&stack)?);
//! assert!(drawing.starts_with("<svg"));
//!
//! let curve = VolumeCurve::new(&stack, &CurveConfig::default())?;
//! assert_eq!(curve.points.len(), 100);
//! # Ok(())
//! # }
//! ```
//!
//! [`StackedCylinders`]: crate::models::storage::stacked_cylinders::StackedCylinders

mod curve;
mod error;
mod schematic;
pub mod svg;

pub use curve::{CurveConfig, CurvePoint, VolumeCurve};
pub use error::RenderError;
pub use schematic::{Schematic, Shape};
