//! `Either`: exactly one of two independently typed values.
//!
//! Unlike `Result`, neither side means failure. Use it for plain choices,
//! such as the two branches of a conditional in [`crate::builder`].

/// A value that is either a `F` or a `S`, never both and never neither.
///
/// The active case is fixed at construction.
///
/// ```
/// # use trellis_core::Either;
/// let value: Either<i32, &str> = Either::First(42);
/// assert_eq!(value.first_value(), Some(&42));
/// assert_eq!(value.second_value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<F, S> {
    First(F),
    Second(S),
}

impl<F, S> Either<F, S> {
    pub fn is_first(&self) -> bool {
        matches!(self, Either::First(_))
    }

    pub fn is_second(&self) -> bool {
        matches!(self, Either::Second(_))
    }

    /// The first-case payload, or `None` if the second case is active.
    pub fn first_value(&self) -> Option<&F> {
        match self {
            Either::First(first) => Some(first),
            Either::Second(_) => None,
        }
    }

    /// The second-case payload, or `None` if the first case is active.
    pub fn second_value(&self) -> Option<&S> {
        match self {
            Either::First(_) => None,
            Either::Second(second) => Some(second),
        }
    }

    pub fn into_first(self) -> Option<F> {
        match self {
            Either::First(first) => Some(first),
            Either::Second(_) => None,
        }
    }

    pub fn into_second(self) -> Option<S> {
        match self {
            Either::First(_) => None,
            Either::Second(second) => Some(second),
        }
    }

    pub fn as_ref(&self) -> Either<&F, &S> {
        match self {
            Either::First(first) => Either::First(first),
            Either::Second(second) => Either::Second(second),
        }
    }

    pub fn map_first<T>(self, f: impl FnOnce(F) -> T) -> Either<T, S> {
        match self {
            Either::First(first) => Either::First(f(first)),
            Either::Second(second) => Either::Second(second),
        }
    }

    pub fn map_second<T>(self, f: impl FnOnce(S) -> T) -> Either<F, T> {
        match self {
            Either::First(first) => Either::First(first),
            Either::Second(second) => Either::Second(f(second)),
        }
    }

    /// Collapse both cases into one value. Only the closure matching the
    /// active case runs.
    pub fn either<T>(self, on_first: impl FnOnce(F) -> T, on_second: impl FnOnce(S) -> T) -> T {
        match self {
            Either::First(first) => on_first(first),
            Either::Second(second) => on_second(second),
        }
    }

    /// Swap the cases.
    pub fn flip(self) -> Either<S, F> {
        match self {
            Either::First(first) => Either::Second(first),
            Either::Second(second) => Either::First(second),
        }
    }
}

impl<T> Either<T, T> {
    /// The payload of whichever case is active.
    pub fn into_inner(self) -> T {
        match self {
            Either::First(value) | Either::Second(value) => value,
        }
    }
}

#[cfg(test)]
#[path = "either_test.rs"]
mod either_test;
