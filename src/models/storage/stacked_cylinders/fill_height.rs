//! Inverse query: the fill height that holds a target volume.
//!
//! The filled volume is continuous and piecewise linear in the fill height,
//! so the height is found by bisecting over the stack's z range.

mod config;
mod error;
mod problem;

pub use config::FillHeightConfig;
pub use error::FillHeightError;

use twine_solvers::equation::bisection;
use uom::si::{f64::Volume, volume::liter};

use super::{FillLevel, FilledVolume, StackedCylinders};

use problem::FillHeightProblem;

impl StackedCylinders {
    /// Finds a fill height whose net liquid volume equals `target`.
    ///
    /// The search runs between the lowest base and the highest top of the
    /// stack. Without displacers the volume only grows with height and the
    /// answer is unique below the first plateau; with displacers the curve
    /// can dip, and any matching height in the range may be returned.
    ///
    /// # Errors
    ///
    /// Returns a [`FillHeightError`] if the stack is empty, if `target` lies
    /// outside the volumes at the ends of the z range, or if the solver fails
    /// to converge.
    pub fn fill_height(
        &self,
        target: Volume,
        config: FillHeightConfig,
    ) -> Result<FillLevel, FillHeightError> {
        let range = self.z_range()?;
        let low = self.filled_volume(range.min);
        let high = self.filled_volume(range.max);

        let tol = config.volume_tol;
        if (low - target).abs() <= tol {
            return Ok(FillLevel {
                height: range.min,
                volume: low,
            });
        }
        if (high - target).abs() <= tol {
            return Ok(FillLevel {
                height: range.max,
                volume: high,
            });
        }

        let (min, max) = if low <= high { (low, high) } else { (high, low) };
        if target < min || target > max {
            return Err(FillHeightError::OutOfRange { target, min, max });
        }

        let model = FilledVolume::new(self);
        let problem = FillHeightProblem::new(target);

        let solution = bisection::solve(
            &model,
            &problem,
            [range.min, range.max],
            &config.bisection(),
            |_event: &bisection::Event<'_, _, _>| None,
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(FillHeightError::MaxIters {
                residual: Volume::new::<liter>(solution.residual),
                iters: solution.iters,
            });
        }

        log::debug!(
            "fill height {} {} converged in {} iterations",
            solution.snapshot.output.height,
            self.unit().symbol(),
            solution.iters
        );

        Ok(solution.snapshot.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::volume::cubic_inch;

    use crate::models::storage::stacked_cylinders::StackError;
    use crate::support::units::LengthUnit;

    fn tank() -> StackedCylinders {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 10.0, None).unwrap();
        stack.add_vessel(1.0, 5.0, None).unwrap();
        stack
    }

    #[test]
    fn recovers_height_of_known_volume() {
        let stack = tank();

        for height in [0.5, 5.0, 9.9, 12.0, 14.5] {
            let target = stack.filled_volume(height);
            let level = stack
                .fill_height(target, FillHeightConfig::default())
                .expect("solve should converge");

            assert_relative_eq!(level.height, height, epsilon = 1e-6);
            assert_relative_eq!(
                level.volume.get::<liter>(),
                target.get::<liter>(),
                epsilon = 1e-8
            );
        }
    }

    #[test]
    fn range_ends_return_directly() {
        let stack = tank();

        let empty = stack
            .fill_height(Volume::new::<liter>(0.0), FillHeightConfig::default())
            .unwrap();
        assert_relative_eq!(empty.height, 0.0);

        let full_volume = Volume::new::<cubic_inch>(45.0 * PI);
        let full = stack
            .fill_height(full_volume, FillHeightConfig::default())
            .unwrap();
        assert_relative_eq!(full.height, 15.0);
    }

    #[test]
    fn works_around_a_displacer() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 10.0, None).unwrap();
        stack.add_displacer(1.0, 3.0, 2.0).unwrap();

        // 17π in³ is held at a height of 5.
        let target = Volume::new::<cubic_inch>(17.0 * PI);
        let level = stack
            .fill_height(target, FillHeightConfig::default())
            .unwrap();

        assert_relative_eq!(level.height, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn rejects_unreachable_volume() {
        let stack = tank();
        let target = Volume::new::<liter>(100.0);

        match stack.fill_height(target, FillHeightConfig::default()) {
            Err(FillHeightError::OutOfRange { min, max, .. }) => {
                assert_relative_eq!(min.get::<liter>(), 0.0);
                assert_relative_eq!(
                    max.get::<cubic_inch>(),
                    45.0 * PI,
                    max_relative = 1e-12
                );
            }
            other => panic!("expected OutOfRange, got: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_model() {
        let stack = StackedCylinders::new(LengthUnit::Inch);
        let result = stack.fill_height(Volume::new::<liter>(1.0), FillHeightConfig::default());

        assert!(matches!(
            result,
            Err(FillHeightError::Stack(StackError::EmptyModel))
        ));
    }

    #[test]
    fn reports_iteration_limit() {
        let stack = tank();
        let config = FillHeightConfig {
            max_iters: 1,
            ..FillHeightConfig::default()
        };

        let result = stack.fill_height(stack.filled_volume(3.3), config);

        assert!(matches!(result, Err(FillHeightError::MaxIters { .. })));
    }
}
