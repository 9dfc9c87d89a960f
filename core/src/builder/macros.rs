//! Block syntax for [`SequenceBuilder`](super::SequenceBuilder).
//!
//! Items are comma separated and lowered as follows:
//!
//! | Item | Rule |
//! |---|---|
//! | `expr` | `build_block([expr])` |
//! | `..expr` | `build_block(expr)` |
//! | `if cond { items }` | `build_optional` |
//! | `if let pat = expr { items }` | `build_optional` |
//! | `if cond { items } else { items }` | `build_either` |
//! | `for pat in iter { items }` | `build_array`, one block per iteration |
//!
//! The block's parts are then joined with `build_array`, and consecutive
//! plain elements share one `build_block`. `else if` chains nest
//! `build_either`. Parenthesized conditions and iterables (`if (cond)`,
//! `for x in (iter)`) are accepted too. The comma after an `if` or `for`
//! item is optional.
//!
//! Expansion happens in one step in `trellis-macros`, so blocks of any
//! length stay within the compiler's recursion limit.

/// Build a sequence with an explicit [`SequenceBuilder`](crate::SequenceBuilder).
///
/// ```
/// # use trellis_core::{build_seq, SmallVecBuilder};
/// let compact = true;
/// let v = build_seq!(SmallVecBuilder<[u8; 4]>;
///     1,
///     if compact { 2 } else { 20, 21, 22 },
/// );
/// assert_eq!(v.as_slice(), &[1, 2]);
/// assert!(!v.spilled());
/// ```
#[macro_export]
macro_rules! build_seq {
    ($builder:ty; $($items:tt)*) => {
        $crate::__private::build_seq!([$crate] $builder; $($items)*)
    };
}

/// Build a `Vec` from a declarative block.
///
/// ```
/// # use trellis_core::array;
/// let extra = Some(vec![4, 5]);
/// let v = array![1, 2, ..[3], if let Some(extra) = extra { ..extra }];
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! array {
    ($($items:tt)*) => {
        $crate::build_seq!($crate::builder::ArrayBuilder<_>; $($items)*)
    };
}
