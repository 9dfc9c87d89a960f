//! Generic numeric helpers.
//!
//! All functions are free-standing and generic over the `num-traits`
//! hierarchy, so they work for primitive integers, floats and
//! `rust_decimal::Decimal` alike.
//!
//! | Function | Result |
//! |---|---|
//! | [`pre_increment`] | `x += 1`, returns the new value |
//! | [`post_increment`] | `x += 1`, returns the old value |
//! | [`split_signed`] | `(x, -x)` |
//! | [`square_root`] | `√x`, NaN for negative input |
//! | [`real_power`] | `base.powf(exp)` |
//! | [`power`] | `base^exp` for `exp >= 0`, panics otherwise |
//! | [`sum`] / [`product`] | folds seeded with zero / one |

mod error;
mod fold;
mod power;
mod unary;

pub use error::AlgebraError;
pub use fold::{product, sum};
#[cfg(feature = "decimal")]
pub use power::{checked_decimal_power, decimal_power};
pub use power::{power, real_power, try_power};
pub use unary::{post_increment, pre_increment, split_signed, square_root};
