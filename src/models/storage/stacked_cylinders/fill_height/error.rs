use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Volume;

use crate::models::storage::stacked_cylinders::StackError;

/// Errors that can occur while solving for a fill height.
#[derive(Debug, Error)]
pub enum FillHeightError {
    /// The stack could not be queried.
    #[error(transparent)]
    Stack(#[from] StackError),

    /// The target volume is not held anywhere between the bottom and top of
    /// the stack.
    #[error("target volume {target:?} is outside {min:?}..={max:?}")]
    OutOfRange {
        target: Volume,
        min: Volume,
        max: Volume,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Volume residual of the last iterate.
        residual: Volume,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
