//! Procedural macros for Trellis
//!
//! This crate expands the block syntax behind `trellis_core::build_seq!` and
//! `trellis_core::array!`. It is not meant to be used directly; the core
//! crate's `macro_rules!` front-ends forward to it.

extern crate proc_macro;

use proc_macro::TokenStream;

mod seq;

/// Lower a declarative block onto `SequenceBuilder` calls.
///
/// Input is `[<core crate path>] <Builder type>; <items>`. The whole block,
/// nested blocks included, is expanded in a single step, so the expansion
/// depth does not grow with the number of items.
///
/// # Example
///
/// ```ignore
/// // What `array![1, 2, if ready { 3 }]` forwards to:
/// build_seq!([::trellis_core] ::trellis_core::builder::ArrayBuilder<_>;
///     1, 2, if ready { 3 });
/// ```
#[proc_macro]
pub fn build_seq(input: TokenStream) -> TokenStream {
    seq::build_seq_impl(input)
}
