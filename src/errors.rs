//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;
use crate::sweep::GridError;

/// Top-level error type for the crate.
///
/// Only the typed construction layer is fallible. The raw formulas in
/// [`crate::fields`] return IEEE-754 NaN or infinities at singular inputs instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElectrostaticsError {
    /// Wraps grid specification errors.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Raised when a medium is built with a relative permittivity that is not finite and positive.
    #[error("relative permittivity must be finite and positive, got {0}")]
    InvalidPermittivity(Scalar),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_errors_convert_transparently() {
        let err: ElectrostaticsError = GridError::EmptyAxis { axis: "z" }.into();
        assert_eq!(err.to_string(), "grid axis z needs at least one sample");
        assert!(ElectrostaticsError::InvalidPermittivity(-1.0)
            .to_string()
            .contains("-1"));
    }
}
