//! Error types for combin_math.

use thiserror::Error;

/// Domain violation: an input fell outside the mathematically valid set
/// for an operation.
///
/// Raised at the point of violation and propagated unchanged; composing
/// functions never wrap or translate it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// `factorial` received a negative or fractional argument.
    #[error("Factorial is only defined for non-negative integers")]
    FactorialOutOfDomain,

    /// `n_choose_k` received `k > n`.
    #[error("k cannot be greater than n")]
    ChooseMoreThanAvailable,

    /// `binomial_expansion` received a negative or fractional exponent.
    #[error("the exponent n must be an integer greater than or equal to 0")]
    ExponentOutOfDomain,
}
