/// Calculates the binomial coefficient of two values, *n* and *k*.
///
/// Uses the incremental product `r = r * (n - k + i) / i`, which stays exact
/// because every intermediate value is itself a binomial coefficient.
///
/// # Returns
/// - `Some(u128)`: The coefficient, `0` when `k > n`.
/// - `None`: If an intermediate product overflows `u128`.
///
/// # Example
/// ```
/// use infix_stairs::steps::multinomial::binomial;
///
/// assert_eq!(binomial(5, 2), Some(10));
/// assert_eq!(binomial(2, 5), Some(0));
/// assert_eq!(binomial(300, 150), None);
/// ```
#[must_use]
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }

    let k = u128::from(std::cmp::min(k, n - k));
    let n = u128::from(n);

    let mut result: u128 = 1;
    for i in 1..=k {
        result = result.checked_mul(n - k + i)? / i;
    }

    Some(result)
}

/// Calculates the multinomial coefficient for the given group sizes.
///
/// This is the number of distinct orderings of a multiset whose repeated
/// elements occur `counts[0]`, `counts[1]`, ... times, i.e.
/// `(sum counts)! / (counts[0]! * counts[1]! * ...)`. It is computed as a
/// product of binomial coefficients so that no factorial is ever formed.
///
/// # Returns
/// `None` if the coefficient does not fit in a `u128`.
///
/// # Example
/// ```
/// use infix_stairs::steps::multinomial::multinomial;
///
/// // 3 2 2 1 1 can be arranged in 5! / (1! * 2! * 2!) ways.
/// assert_eq!(multinomial(&[1, 2, 2]), Some(30));
/// assert_eq!(multinomial(&[]), Some(1));
/// ```
#[must_use]
pub fn multinomial(counts: &[u64]) -> Option<u128> {
    let mut total: u64 = 0;
    let mut result: u128 = 1;

    for &count in counts {
        total = total.checked_add(count)?;
        result = result.checked_mul(binomial(total, count)?)?;
    }

    Some(result)
}
