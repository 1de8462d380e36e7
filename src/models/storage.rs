//! Liquid storage models.
//!
//! This module contains geometric models of tanks and the solids submerged
//! in them.

pub mod stacked_cylinders;
