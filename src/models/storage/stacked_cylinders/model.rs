use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::Volume;

use super::StackedCylinders;

/// A fill height paired with the liquid volume it holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillLevel {
    /// Fill height in the model's length unit.
    pub height: f64,

    /// Net liquid volume below `height`.
    pub volume: Volume,
}

/// [`Model`] adapter evaluating [`StackedCylinders::filled_volume`].
///
/// The input is a fill height in the stack's length unit.
///
/// # Example
///
/// ```
/// use tank_stack::models::storage::stacked_cylinders::{FilledVolume, StackedCylinders};
/// use tank_stack::support::units::LengthUnit;
/// use twine_core::Model;
///
/// let mut stack = StackedCylinders::new(LengthUnit::Centimeter);
/// stack.add_vessel(10.0, 20.0, None).unwrap();
///
/// let level = FilledVolume::new(&stack).call(&5.0).unwrap();
/// assert_eq!(level.height, 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FilledVolume<'a> {
    stack: &'a StackedCylinders,
}

impl<'a> FilledVolume<'a> {
    #[must_use]
    pub fn new(stack: &'a StackedCylinders) -> Self {
        Self { stack }
    }
}

impl Model for FilledVolume<'_> {
    type Input = f64;
    type Output = FillLevel;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(FillLevel {
            height: *input,
            volume: self.stack.filled_volume(*input),
        })
    }
}
