//! Trellis core: value-level building blocks.
//!
//! - [`builder`]: declarative sequence construction (`array!`, `build_seq!`).
//! - [`algebra`]: generic increment, powers, roots and folds.
//! - [`either`]: a two-case tagged union that is not an error type.
//! - [`never`]: helpers for diverging fallbacks and infallible results.
//!
//! Everything here is pure and allocation-light; the crate is `no_std` unless
//! the `std` feature is enabled.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::vec::Vec;

pub mod algebra;
pub mod builder;
pub mod either;
pub mod never;

pub use algebra::{
    AlgebraError, post_increment, power, pre_increment, product, real_power, split_signed,
    square_root, sum, try_power,
};
#[cfg(feature = "decimal")]
pub use algebra::{checked_decimal_power, decimal_power};
pub use builder::{ArrayBuilder, SequenceBuilder, SmallVecBuilder};
pub use either::Either;
pub use never::{OptionExt, ResultExt};

#[doc(hidden)]
pub mod __private {
    pub use trellis_macros::build_seq;
}

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_power_rejects_negative() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
