//! Single-operand helpers: increment, signed split and square root.

use core::ops::AddAssign;

use num_traits::{Float, One, Signed};

/// Increment `value` by one in place and return the new value.
///
/// Overflow follows the native policy of `T` (for primitive integers: panic
/// in debug builds, wrap in release builds).
///
/// ```
/// # use trellis_core::pre_increment;
/// let mut n = 5;
/// assert_eq!(pre_increment(&mut n), 6);
/// assert_eq!(n, 6);
/// ```
#[inline]
pub fn pre_increment<T>(value: &mut T) -> T
where
    T: AddAssign + One + Copy,
{
    *value += T::one();
    *value
}

/// Increment `value` by one in place and return the value it held before.
///
/// ```
/// # use trellis_core::post_increment;
/// let mut n = 5;
/// assert_eq!(post_increment(&mut n), 5);
/// assert_eq!(n, 6);
/// ```
#[inline]
pub fn post_increment<T>(value: &mut T) -> T
where
    T: AddAssign + One + Copy,
{
    let previous = *value;
    *value += T::one();
    previous
}

/// Return `(value, -value)`.
#[inline]
pub fn split_signed<T>(value: T) -> (T, T)
where
    T: Signed + Clone,
{
    let negated = -value.clone();
    (value, negated)
}

/// Principal square root.
///
/// Negative input yields NaN (IEEE 754 semantics), never a panic.
#[inline]
pub fn square_root<T: Float>(value: T) -> T {
    value.sqrt()
}
