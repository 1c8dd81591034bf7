//! Primality testing.

/// Primality test via trial division over `6k ± 1` candidates up to √n.
///
/// After ruling out multiples of 2 and 3, every remaining prime has the
/// form `6k ± 1`, so only those candidates are tried. Numbers `<= 1` are
/// not prime. O(√n).
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut divisor: u64 = 5;
    // divisor * divisor <= n, written division-side to avoid overflow
    while divisor <= n / divisor {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}
