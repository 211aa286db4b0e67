// ============================================================================
// Fixed-Point Errors
// Error types for checked fixed-point arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point arithmetic operations.
///
/// Every failure is surfaced as one of these four kinds at the point of
/// violation; nothing is retried or substituted with a default inside the
/// library. Callers branch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedPointError {
    /// Result exceeded u64::MAX
    Overflow,
    /// Subtraction would produce a negative value
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Operands have different decimal counts
    ScaleMismatch,
}

impl fmt::Display for FixedPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedPointError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            FixedPointError::Underflow => {
                write!(f, "arithmetic underflow: result would be negative")
            },
            FixedPointError::DivisionByZero => write!(f, "division by zero"),
            FixedPointError::ScaleMismatch => write!(f, "scale mismatch between operands"),
        }
    }
}

impl std::error::Error for FixedPointError {}

/// Result type alias for fixed-point operations
pub type FixedPointResult<T> = Result<T, FixedPointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FixedPointError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(
            FixedPointError::Underflow.to_string(),
            "arithmetic underflow: result would be negative"
        );
        assert_eq!(
            FixedPointError::DivisionByZero.to_string(),
            "division by zero"
        );
        assert_eq!(
            FixedPointError::ScaleMismatch.to_string(),
            "scale mismatch between operands"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FixedPointError::Overflow, FixedPointError::Overflow);
        assert_ne!(FixedPointError::Overflow, FixedPointError::Underflow);
    }
}
