//! Trellis - small value-level utilities for declarative code
//!
//! # Overview
//!
//! Trellis collects three independent pieces that UI-style code keeps
//! reaching for:
//!
//! - A declarative **sequence builder** ([`array!`], [`build_seq!`]) that
//!   turns a block with embedded `if`, `if`/`else` and `for` into one flat,
//!   ordered collection.
//! - **Algebra extensions**: [`pre_increment`], [`post_increment`],
//!   [`split_signed`], [`square_root`], [`real_power`], [`power`], [`sum`]
//!   and [`product`], generic over `num-traits`.
//! - [`Either`], a two-case tagged union that is not an error type.
//!
//! # Quick Start
//!
//! ```
//! use trellis::{array, power, sum, Either};
//!
//! let logged_in = false;
//! let menu = array![
//!     "Home",
//!     if logged_in { "Profile", "Sign out" } else { "Sign in" },
//!     for n in 1..=2 { if n == 2 { "Help" } },
//! ];
//! assert_eq!(menu, vec!["Home", "Sign in", "Help"]);
//!
//! assert_eq!(power(2, 10), 1024);
//! assert_eq!(sum([1, 2, 3]), 6);
//!
//! let choice: Either<u8, &str> = Either::Second("text");
//! assert_eq!(choice.second_value(), Some(&"text"));
//! ```
//!
//! # Failure semantics
//!
//! [`power`] panics on a negative exponent; [`try_power`] reports it as
//! [`AlgebraError::NegativeExponent`] instead. Float operations never fail
//! and follow IEEE-754 (NaN, infinities).
//!
//! # Features
//!
//! - `std` (default): link the standard library.
//! - `decimal` (default): [`decimal_power`] over `rust_decimal::Decimal`.
//! - `serde`: serialization for [`Either`].

#![cfg_attr(not(feature = "std"), no_std)]

pub use trellis_core::*;
