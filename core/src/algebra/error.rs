//! Errors reported by the checked algebra operations.
//!
//! Only the opt-in `try_*` / `checked_*` forms return these. The default
//! operations either panic on a violated precondition (`power`) or defer to
//! IEEE-754 special values (`square_root`, `real_power`).

use thiserror::Error;

/// Error returned by the recoverable power functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Integer power was asked for a negative exponent.
    #[error("negative powers are not allowed (exponent {exponent})")]
    NegativeExponent { exponent: i64 },

    /// Decimal power exceeded the representable range.
    #[error("decimal power overflowed (exponent {exponent})")]
    DecimalOverflow { exponent: i64 },
}
