//! Ordered-sequence primitives shared by the combinatorics pipeline.
//!
//! All three are total: no well-typed input can make them fail.

use num_traits::{One, Zero};

/// Integers from `start` to `end` inclusive, in ascending order.
///
/// Inverted bounds (`end < start`) yield an empty sequence rather than an
/// error; callers that need a non-empty range check their own bounds.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..=end).collect()
}

/// Left-to-right running total. An empty sequence sums to zero.
pub fn sum<T, I>(values: I) -> T
where
    T: Zero,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(T::zero(), |acc, v| acc + v)
}

/// Left-to-right running product. An empty sequence multiplies to one,
/// the multiplicative identity.
pub fn product<T, I>(values: I) -> T
where
    T: One,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(T::one(), |acc, v| acc * v)
}
