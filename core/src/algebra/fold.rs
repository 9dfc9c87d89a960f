//! Sum and product folds over ordered sequences.

use core::ops::{Add, Mul};

use num_traits::{One, Zero};

/// Left fold of `+` seeded with zero. An empty input yields zero.
///
/// ```
/// # use trellis_core::sum;
/// assert_eq!(sum([1, 2, 3]), 6);
/// assert_eq!(sum(Vec::<i32>::new()), 0);
/// ```
pub fn sum<I>(values: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + Add<Output = I::Item>,
{
    values.into_iter().fold(<I::Item as Zero>::zero(), |acc, value| acc + value)
}

/// Left fold of `*` seeded with one. An empty input yields one.
pub fn product<I>(values: I) -> I::Item
where
    I: IntoIterator,
    I::Item: One + Mul<Output = I::Item>,
{
    values.into_iter().fold(<I::Item as One>::one(), |acc, value| acc * value)
}
