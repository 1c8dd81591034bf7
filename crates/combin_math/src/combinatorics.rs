//! Binomial coefficients and the binomial-theorem expansion of `(a+b)^n`.

use crate::error::DomainError;
use crate::factorial::factorial;
use crate::sequences::{range, sum};

/// Binomial coefficient `C(n, k) = n! / (k! * (n-k)!)`.
///
/// Rejects `k > n` before touching factorial; anything else outside
/// factorial's domain (negative or fractional `n`, `k`, or `n - k`)
/// surfaces as factorial's own error, unwrapped.
pub fn n_choose_k(n: f64, k: f64) -> Result<f64, DomainError> {
    if k > n {
        return Err(DomainError::ChooseMoreThanAvailable);
    }
    let numerator = factorial(n)?;
    let denominator = factorial(k)? * factorial(n - k)?;
    Ok(numerator / denominator)
}

/// `(a + b)^n` by the binomial theorem: the sum over `k = 0..=n` of
/// `C(n,k) * a^(n-k) * b^k`.
///
/// `n` must be a non-negative mathematical integer, checked before any
/// term is computed. `a` and `b` are unconstrained; exponentiation uses
/// standard floating-point semantics, so `0^0 = 1` and `n = 0` always
/// yields 1.
pub fn binomial_expansion(a: f64, b: f64, n: f64) -> Result<f64, DomainError> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(DomainError::ExponentOutOfDomain);
    }
    let degree = n as i64;
    let terms = range(0, degree)
        .into_iter()
        .map(|k| {
            let coefficient = n_choose_k(n, k as f64)?;
            Ok(coefficient * a.powi((degree - k) as i32) * b.powi(k as i32))
        })
        .collect::<Result<Vec<_>, DomainError>>()?;
    Ok(sum(terms))
}

#[cfg(test)]
mod tests {
    use super::{binomial_expansion, n_choose_k};
    use crate::error::DomainError;

    #[test]
    fn choose_edges() {
        assert_eq!(n_choose_k(5.0, 0.0).unwrap(), 1.0);
        assert_eq!(n_choose_k(5.0, 5.0).unwrap(), 1.0);
        assert_eq!(n_choose_k(0.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn choose_values() {
        assert_eq!(n_choose_k(5.0, 2.0).unwrap(), 10.0);
        assert_eq!(n_choose_k(6.0, 3.0).unwrap(), 20.0);
        assert_eq!(n_choose_k(8.0, 3.0).unwrap(), 56.0);
    }

    #[test]
    fn choose_rejects_k_greater_than_n() {
        assert_eq!(
            n_choose_k(3.0, 10.0),
            Err(DomainError::ChooseMoreThanAvailable)
        );
        assert_eq!(
            n_choose_k(3.0, 10.0).unwrap_err().to_string(),
            "k cannot be greater than n"
        );
    }

    #[test]
    fn choose_propagates_factorial_domain_unchanged() {
        // k <= n holds, so the failure comes from factorial itself
        assert_eq!(
            n_choose_k(-1.0, -2.0),
            Err(DomainError::FactorialOutOfDomain)
        );
        assert_eq!(n_choose_k(5.0, 2.5), Err(DomainError::FactorialOutOfDomain));
    }

    #[test]
    fn choose_nan_falls_through_to_factorial() {
        // NaN makes `k > n` false, so the factorial check catches it
        assert_eq!(
            n_choose_k(f64::NAN, 1.0),
            Err(DomainError::FactorialOutOfDomain)
        );
    }

    #[test]
    fn expansion_concrete_values() {
        assert_eq!(binomial_expansion(2.0, 3.0, 2.0).unwrap(), 25.0);
        assert_eq!(binomial_expansion(1.0, 1.0, 10.0).unwrap(), 1024.0);
        assert_eq!(binomial_expansion(-1.0, 1.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn expansion_of_degree_zero_is_one() {
        assert_eq!(binomial_expansion(7.5, -3.25, 0.0).unwrap(), 1.0);
        assert_eq!(binomial_expansion(0.0, 0.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn expansion_rejects_invalid_exponent() {
        assert_eq!(
            binomial_expansion(2.0, 3.0, -1.0),
            Err(DomainError::ExponentOutOfDomain)
        );
        assert_eq!(
            binomial_expansion(2.0, 3.0, 1.5),
            Err(DomainError::ExponentOutOfDomain)
        );
        assert_eq!(
            binomial_expansion(2.0, 3.0, -1.0).unwrap_err().to_string(),
            "the exponent n must be an integer greater than or equal to 0"
        );
    }

    #[test]
    fn expansion_handles_zero_bases() {
        // 0^0 = 1 keeps the k = n and k = 0 terms alive
        assert_eq!(binomial_expansion(0.0, 2.0, 3.0).unwrap(), 8.0);
        assert_eq!(binomial_expansion(2.0, 0.0, 3.0).unwrap(), 8.0);
    }
}
