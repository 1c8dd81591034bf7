//! Factorial as a product over an inclusive integer range.

use crate::error::DomainError;
use crate::sequences::{product, range};

/// `n!`, the product of the integers `1..=n`, with `0! = 1`.
///
/// `n` must be a non-negative mathematical integer; the check runs before
/// any computation. NaN and the infinities fail the integer check.
/// Results above `f64`'s exact-integer range (2^53) lose precision
/// silently.
pub fn factorial(n: f64) -> Result<f64, DomainError> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(DomainError::FactorialOutOfDomain);
    }
    if n == 0.0 {
        return Ok(1.0);
    }
    Ok(product(range(1, n as i64).into_iter().map(|k| k as f64)))
}
