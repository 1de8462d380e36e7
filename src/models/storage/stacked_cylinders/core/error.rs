use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while building or querying a [`StackedCylinders`].
///
/// [`StackedCylinders`]: super::StackedCylinders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// A displacer was added without a base elevation.
    ///
    /// Displacers are never auto-stacked, so their `z` is required.
    #[error("displacing records need an explicit z")]
    MissingElevation,

    /// The radius is not finite and strictly positive.
    #[error("invalid radius: {0}")]
    InvalidRadius(ConstraintError),

    /// The height is not finite and strictly positive.
    #[error("invalid height: {0}")]
    InvalidHeight(ConstraintError),

    /// The base or top elevation is not finite.
    #[error("invalid z: {0}")]
    InvalidElevation(ConstraintError),

    /// The full volume of the cylinder is not representable.
    #[error("invalid volume: {0}")]
    InvalidVolume(ConstraintError),

    /// A range was requested from a model with no records.
    #[error("model has no records")]
    EmptyModel,
}
