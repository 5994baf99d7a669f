//! Error types for matrix multiplication.
//!
//! Only configuration and shape problems are reported here. Worker panics and
//! allocation failures are not recoverable and propagate as panics.

use std::fmt;

/// Errors returned by the multiplication entry points and constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    /// The block edge was 0. Stepping by it would never terminate.
    ZeroBlockEdge,
    /// A, B and R don't share the same dimension.
    DimensionMismatch {
        /// Dimension of A.
        a: usize,
        /// Dimension of B.
        b: usize,
        /// Dimension of the result.
        r: usize,
    },
    /// Backing data doesn't describe an N×N matrix.
    InvalidShape {
        /// Number of elements (or row length) that was expected.
        expected: usize,
        /// Number of elements (or row length) that was found.
        found: usize,
    },
    /// A configuration value couldn't be parsed.
    InvalidConfig {
        /// Name of the setting, e.g. the environment variable.
        key: String,
        /// The raw value that was rejected.
        value: String,
    },
}

impl fmt::Display for MatmulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatmulError::ZeroBlockEdge => write!(f, "Block edge must be at least 1, got 0"),
            MatmulError::DimensionMismatch { a, b, r } => write!(
                f,
                "Dimension mismatch: A is {}x{}, B is {}x{}, R is {}x{}",
                a, a, b, b, r, r
            ),
            MatmulError::InvalidShape { expected, found } => write!(
                f,
                "Invalid matrix shape: expected {} elements, found {}",
                expected, found
            ),
            MatmulError::InvalidConfig { key, value } => {
                write!(f, "Invalid configuration: {}={:?}", key, value)
            }
        }
    }
}

impl std::error::Error for MatmulError {}

/// Result type alias for matmul operations.
pub type Result<T> = std::result::Result<T, MatmulError>;

/// Creates a dimension mismatch error.
pub fn dimension_mismatch(a: usize, b: usize, r: usize) -> MatmulError {
    MatmulError::DimensionMismatch { a, b, r }
}

/// Creates a shape error.
pub fn invalid_shape(expected: usize, found: usize) -> MatmulError {
    MatmulError::InvalidShape { expected, found }
}

/// Creates a configuration error.
pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> MatmulError {
    MatmulError::InvalidConfig {
        key: key.into(),
        value: value.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_block_edge_display() {
        let display = format!("{}", MatmulError::ZeroBlockEdge);
        assert!(display.contains("at least 1"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let display = format!("{}", dimension_mismatch(3, 4, 3));
        assert!(display.contains("A is 3x3"));
        assert!(display.contains("B is 4x4"));
        assert!(display.contains("R is 3x3"));
    }

    #[test]
    fn test_invalid_config_display() {
        let display = format!("{}", invalid_config("MATMUL_THREADS", "lots"));
        assert!(display.contains("MATMUL_THREADS"));
        assert!(display.contains("\"lots\""));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(invalid_shape(9, 8), invalid_shape(9, 8));
        assert_ne!(invalid_shape(9, 8), invalid_shape(9, 7));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = MatmulError::ZeroBlockEdge;
        let _: &dyn std::error::Error = &error;
        assert!(std::error::Error::source(&error).is_none());
    }
}
