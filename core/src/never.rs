//! Diverging fallbacks and infallible results.
//!
//! `Infallible` has no values, so a closure returning it can only leave by
//! panicking, aborting or exiting. That lets these helpers hand back a plain
//! `T` with no sentinel.

use core::convert::Infallible;

pub trait OptionExt<T> {
    /// Return the payload, or run `diverge` when there is none.
    ///
    /// ```should_panic
    /// # use trellis_core::OptionExt;
    /// let missing: Option<u32> = None;
    /// missing.unwrap_or_never(|| panic!("value is required"));
    /// ```
    fn unwrap_or_never(self, diverge: impl FnOnce() -> Infallible) -> T;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn unwrap_or_never(self, diverge: impl FnOnce() -> Infallible) -> T {
        match self {
            Some(value) => value,
            None => {
                let never = diverge();
                match never {}
            }
        }
    }
}

pub trait ResultExt<T> {
    /// The success value of a result whose error type is uninhabited.
    fn into_value(self) -> T;
}

impl<T> ResultExt<T> for Result<T, Infallible> {
    #[inline]
    fn into_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_or_never_some_skips_closure() {
        let value = Some(7).unwrap_or_never(|| panic!("must not run"));
        assert_eq!(value, 7);
    }

    #[test]
    #[should_panic(expected = "no value")]
    fn test_unwrap_or_never_none_diverges() {
        let missing: Option<i32> = None;
        missing.unwrap_or_never(|| panic!("no value"));
    }

    #[test]
    fn test_into_value() {
        let result: Result<&str, Infallible> = Ok("done");
        assert_eq!(result.into_value(), "done");
    }

    #[test]
    fn test_into_value_from_infallible_conversion() {
        let converted: Result<u64, Infallible> = u64::try_from(9_u32);
        assert_eq!(converted.into_value(), 9);
    }
}
