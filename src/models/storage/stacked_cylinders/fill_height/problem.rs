//! Equation problem for matching a target volume.

use std::convert::Infallible;

use twine_core::EquationProblem;
use uom::si::{f64::Volume, volume::liter};

use crate::models::storage::stacked_cylinders::FillLevel;

/// Computes the residual `achieved_volume - target_volume` in liters.
pub(super) struct FillHeightProblem {
    target: Volume,
}

impl FillHeightProblem {
    pub(super) fn new(target: Volume) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for FillHeightProblem {
    type Input = f64;
    type Output = FillLevel;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.volume - self.target).get::<liter>()])
    }
}
