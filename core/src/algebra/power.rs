//! Exponentiation.
//!
//! Three flavours, picked by the caller rather than by overloading:
//! - [`real_power`] for floats, following IEEE-754 `pow`.
//! - [`decimal_power`] for exact decimals (feature `decimal`).
//!   Overflow follows `Decimal`'s own arithmetic and panics, the same way
//!   `power` and the increments follow their type's native `*` and `+=`.
//!   Use [`checked_decimal_power`] when the inputs are not trusted.
//! - [`power`] for any `Num` type and a non-negative integer exponent.

use num_traits::{Float, Num};

use super::AlgebraError;

/// `base` raised to the real `exponent`.
///
/// Zero and negative bases, infinities and NaN all follow `powf`; nothing
/// here panics.
#[inline]
pub fn real_power<T: Float>(base: T, exponent: T) -> T {
    base.powf(exponent)
}

/// `base` raised to a non-negative integer `exponent`, by repeated
/// multiplication.
///
/// `exponent == 0` yields one for any base, `exponent == 1` yields `base`.
///
/// # Panics
///
/// Panics if `exponent` is negative. Use [`try_power`] to get an error
/// instead.
///
/// ```
/// # use trellis_core::power;
/// assert_eq!(power(2u32, 10), 1024);
/// assert_eq!(power(7, 0), 1);
/// ```
pub fn power<T>(base: T, exponent: i64) -> T
where
    T: Num + Copy,
{
    match try_power(base, exponent) {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// Checked form of [`power`]: a negative exponent is reported as
/// [`AlgebraError::NegativeExponent`].
pub fn try_power<T>(base: T, exponent: i64) -> Result<T, AlgebraError>
where
    T: Num + Copy,
{
    if exponent < 0 {
        tracing::debug!(exponent, "rejecting negative integer exponent");
        return Err(AlgebraError::NegativeExponent { exponent });
    }

    let value = match exponent {
        0 => T::one(),
        1 => base,
        _ => (1..exponent).fold(base, |acc, _| acc * base),
    };
    Ok(value)
}

#[cfg(feature = "decimal")]
pub use self::decimal::{checked_decimal_power, decimal_power};

#[cfg(feature = "decimal")]
mod decimal {
    use rust_decimal::{Decimal, MathematicalOps};

    use crate::algebra::AlgebraError;

    /// Exact decimal `base` raised to the integer `exponent`.
    ///
    /// Negative exponents are allowed and yield the reciprocal power.
    ///
    /// # Panics
    ///
    /// Overflow is handled like any other `Decimal` arithmetic: if the
    /// result does not fit in a `Decimal`, this panics, as `Decimal * Decimal`
    /// does. Prefer [`checked_decimal_power`] for untrusted input.
    pub fn decimal_power(base: Decimal, exponent: i64) -> Decimal {
        base.powi(exponent)
    }

    /// Like [`decimal_power`], but reports overflow as
    /// [`AlgebraError::DecimalOverflow`].
    pub fn checked_decimal_power(base: Decimal, exponent: i64) -> Result<Decimal, AlgebraError> {
        base.checked_powi(exponent).ok_or_else(|| {
            tracing::debug!(%base, exponent, "decimal power overflowed");
            AlgebraError::DecimalOverflow { exponent }
        })
    }
}
