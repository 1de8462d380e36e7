use twine_solvers::equation::bisection;
use uom::si::{f64::Volume, volume::liter};

/// Solver configuration for the fill-height search.
#[derive(Debug, Clone, Copy)]
pub struct FillHeightConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the fill height, in the model's length unit.
    pub height_tol: f64,

    /// Absolute tolerance on the volume residual (achieved - target).
    pub volume_tol: Volume,
}

impl Default for FillHeightConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            height_tol: 1e-9,
            volume_tol: Volume::new::<liter>(1e-9),
        }
    }
}

impl FillHeightConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.height_tol,
            x_rel_tol: 0.0,
            residual_tol: self.volume_tol.get::<liter>(),
        }
    }
}
