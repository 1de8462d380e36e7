use thiserror::Error;

use crate::models::storage::stacked_cylinders::StackError;

/// Errors that can occur while building plot data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The stack could not be queried.
    #[error(transparent)]
    Stack(#[from] StackError),

    /// A curve needs at least its two end points.
    #[error("a volume curve needs at least 2 samples, got {samples}")]
    TooFewSamples { samples: usize },
}
