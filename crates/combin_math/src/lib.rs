//! Elementary combinatorics over `f64`.
//!
//! The crate is a small pure-function pipeline: sequence utilities
//! ([`range`], [`sum`], [`product`]) feed [`factorial`], which feeds
//! [`n_choose_k`], which feeds [`binomial_expansion`]. Nothing holds
//! state, so every function is safe to call from anywhere in any order.
//!
//! Arithmetic is plain `f64`: results past 2^53 silently lose precision.
//! That is an accepted limitation, not something the crate guards against.

pub mod combinatorics;
pub mod error;
pub mod factorial;
pub mod number_theory;
pub mod sequences;

pub use combinatorics::{binomial_expansion, n_choose_k};
pub use error::DomainError;
pub use factorial::factorial;
pub use number_theory::is_prime;
pub use sequences::{product, range, sum};
