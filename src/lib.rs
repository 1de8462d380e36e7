//! # Tank Stack
//!
//! Liquid volume models for stacks of coaxial cylindrical tanks, with the
//! solids submerged in them, as a function of fill height.
//!
//! ## Crate layout
//!
//! - [`models`]: Tank models, starting with
//!   [`StackedCylinders`](models::storage::stacked_cylinders::StackedCylinders).
//! - [`render`]: Plot data and SVG drawings built from a model's queries.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Rejected records are reported at `warn`, auto-stacked records and solver
//! results at `debug`.

pub mod models;
pub mod render;
pub mod support;
