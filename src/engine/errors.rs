// ============================================================================
// Rounding Errors
// Error types for duration-grid rounding operations
// ============================================================================

use std::fmt;

/// Errors that can occur during grid rounding operations.
///
/// All of these are caller-usage errors surfaced synchronously; nothing is
/// retried or coerced internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundError {
    /// `dt` and `base` are different timestamp variants
    VariantMismatch,
    /// Rounding unit is zero or negative
    NonPositiveUnit,
    /// Grid point falls outside the representable date range
    OutOfRange,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::VariantMismatch => write!(
                f,
                "variant mismatch: timestamp and base must share the same calendar shape"
            ),
            RoundError::NonPositiveUnit => {
                write!(f, "non-positive unit: rounding unit must be greater than zero")
            },
            RoundError::OutOfRange => write!(
                f,
                "out of range: grid point is outside the representable date range"
            ),
            RoundError::InvalidInput => write!(f, "invalid input: could not parse timestamp"),
        }
    }
}

impl std::error::Error for RoundError {}

/// Result type alias for rounding operations
pub type RoundResult<T> = Result<T, RoundError>;
