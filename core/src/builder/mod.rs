//! Declarative sequence construction.
//!
//! A [`SequenceBuilder`] turns a block of literal elements, spliced
//! sequences, optional parts and two-way branches into one flat, ordered
//! sequence. Callers normally go through the [`array!`](crate::array) and
//! [`build_seq!`](crate::build_seq) macros, which lower control flow onto
//! the builder rules:
//!
//! ```
//! # use trellis_core::array;
//! let show_header = true;
//! let rows = array![
//!     if show_header { "header" },
//!     for i in 1..=2 { if i % 2 == 0 { "even" } else { "odd" } },
//!     "footer",
//! ];
//! assert_eq!(rows, vec!["header", "odd", "even", "footer"]);
//! ```
//!
//! # Design
//!
//! The builder separates:
//! - **What the parts are** (elements, sub-sequences, options, branches)
//! - **How they are stored** (`Self::Sequence`: `Vec`, `SmallVec`, ...)
//!
//! Every rule is total and pure. Nothing is validated, sorted or
//! deduplicated.

use core::marker::PhantomData;

use smallvec::SmallVec;

use crate::{Either, Vec};

mod macros;

/// The composition rules of a declarative sequence.
///
/// Implementors only choose the element and sequence types; every rule has
/// a default implementation in terms of `FromIterator`.
pub trait SequenceBuilder {
    /// The element type of the produced sequence.
    type Element;

    /// The ordered sequence produced by each rule.
    ///
    /// Any output is valid input to [`build_array`](Self::build_array), which
    /// is what makes the rules compose.
    type Sequence: FromIterator<Self::Element> + IntoIterator<Item = Self::Element> + Default;

    /// A block of individual elements, in order.
    fn build_block<I>(components: I) -> Self::Sequence
    where
        I: IntoIterator<Item = Self::Element>,
    {
        components.into_iter().collect()
    }

    /// Left-to-right concatenation of sub-sequences (one level of flattening).
    fn build_array<I>(components: I) -> Self::Sequence
    where
        I: IntoIterator<Item = Self::Sequence>,
    {
        components.into_iter().flatten().collect()
    }

    /// An `if` without `else`: present parts are kept verbatim, absent parts
    /// contribute nothing.
    fn build_optional(component: Option<Self::Sequence>) -> Self::Sequence {
        match component {
            Some(sequence) => sequence,
            None => {
                tracing::trace!("optional component absent");
                Default::default()
            }
        }
    }

    /// An `if`/`else`: whichever branch was chosen, verbatim.
    fn build_either(component: Either<Self::Sequence, Self::Sequence>) -> Self::Sequence {
        match component {
            Either::First(sequence) => Self::build_either_first(sequence),
            Either::Second(sequence) => Self::build_either_second(sequence),
        }
    }

    fn build_either_first(component: Self::Sequence) -> Self::Sequence {
        tracing::trace!("taking first branch");
        component
    }

    fn build_either_second(component: Self::Sequence) -> Self::Sequence {
        tracing::trace!("taking second branch");
        component
    }

    /// Lazy [`build_optional`](Self::build_optional): `then` only runs when
    /// `condition` holds.
    fn build_if(condition: bool, then: impl FnOnce() -> Self::Sequence) -> Self::Sequence {
        Self::build_optional(condition.then(then))
    }

    /// Lazy [`build_either`](Self::build_either): exactly one closure runs.
    fn build_if_else(
        condition: bool,
        then: impl FnOnce() -> Self::Sequence,
        otherwise: impl FnOnce() -> Self::Sequence,
    ) -> Self::Sequence {
        let branch = if condition {
            Either::First(then())
        } else {
            Either::Second(otherwise())
        };
        Self::build_either(branch)
    }
}

/// Builds a `Vec<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayBuilder<T>(PhantomData<T>);

impl<T> SequenceBuilder for ArrayBuilder<T> {
    type Element = T;
    type Sequence = Vec<T>;

    // Reuses the first part's allocation instead of collecting from scratch.
    fn build_array<I>(components: I) -> Vec<T>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut parts = components.into_iter();
        let Some(mut sequence) = parts.next() else {
            return Vec::new();
        };
        for part in parts {
            sequence.extend(part);
        }
        sequence
    }
}

/// Builds a `SmallVec<A>`, keeping short sequences inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmallVecBuilder<A>(PhantomData<A>);

impl<A: smallvec::Array> SequenceBuilder for SmallVecBuilder<A> {
    type Element = A::Item;
    type Sequence = SmallVec<A>;
}
