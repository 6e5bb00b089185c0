use log::debug;

/// Binomial and multinomial coefficients in checked `u128` arithmetic.
pub mod multinomial;
/// Partitions of a staircase into 3-, 2- and 1-step moves.
///
/// Every way of climbing is an ordering of one partition, so counting the
/// orderings of each partition and summing them counts every way once.
pub mod partition;

pub use partition::{Partition, Partitions};

use crate::error::{ArithmeticError, DomainError, Result};

/// The largest staircase whose number of ways fits in a `u128`.
pub const MAX_SUPPORTED_STEPS: u64 = 146;

/// Counts the ways to climb `n` steps taking 1, 2 or 3 steps at a time.
///
/// The count is the sum, over every partition of `n` into 3-, 2- and 1-step
/// moves, of the number of orderings of that partition. No table of smaller
/// results is kept.
///
/// # Errors
/// - [`DomainError::NegativeSteps`] if `n` is negative.
/// - [`ArithmeticError::CountOverflow`] if `n` exceeds
///   [`MAX_SUPPORTED_STEPS`].
///
/// # Example
/// ```
/// use infix_stairs::steps::count_ways;
///
/// // 1111 121 211 112 22 13 31
/// assert_eq!(count_ways(4).unwrap(), 7);
/// assert_eq!(count_ways(0).unwrap(), 1);
/// assert!(count_ways(-1).is_err());
/// ```
pub fn count_ways(n: i64) -> Result<u128> {
    let steps = to_steps(n)?;
    Ok(count_compositions(steps)?)
}

/// Counts the ways for every staircase from 0 up to and including `limit`.
///
/// # Errors
/// The same as [`count_ways`] for `limit`.
///
/// # Example
/// ```
/// use infix_stairs::steps::count_table;
///
/// assert_eq!(count_table(6).unwrap(), [1, 1, 2, 4, 7, 13, 24]);
/// ```
pub fn count_table(limit: i64) -> Result<Vec<u128>> {
    let limit = to_steps(limit)?;

    let table = (0..=limit).map(count_compositions)
                           .collect::<std::result::Result<Vec<u128>, ArithmeticError>>()?;
    Ok(table)
}

fn to_steps(n: i64) -> std::result::Result<u64, DomainError> {
    u64::try_from(n).map_err(|_| DomainError::NegativeSteps { n })
}

fn count_compositions(steps: u64) -> std::result::Result<u128, ArithmeticError> {
    let overflow = || ArithmeticError::CountOverflow { steps };

    if steps > MAX_SUPPORTED_STEPS {
        return Err(overflow());
    }

    let mut total: u128 = 0;
    let mut partitions = 0;
    for partition in Partitions::new(steps) {
        let ways = partition.arrangements().ok_or_else(overflow)?;
        total = total.checked_add(ways).ok_or_else(overflow)?;
        partitions += 1;
    }

    debug!("{steps} steps: {total} ways across {partitions} partitions");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn largest_supported_staircase() {
        assert_eq!(count_ways(146).unwrap(), 269_216_838_928_454_720_696_964_324_302_545_675_954);
    }

    #[test]
    fn beyond_the_supported_range_overflows() {
        assert_eq!(count_ways(147),
                   Err(Error::Arithmetic(ArithmeticError::CountOverflow { steps: 147 })));
        assert_eq!(count_ways(i64::MAX),
                   Err(Error::Arithmetic(ArithmeticError::CountOverflow { steps: i64::MAX as u64 })));
    }

    #[test]
    fn checked_sum_agrees_with_the_range_guard() {
        // Without the guard, the partition sum itself must overflow at 147.
        let sum: Option<u128> = Partitions::new(MAX_SUPPORTED_STEPS + 1)
            .map(|p| p.arrangements())
            .try_fold(0u128, |total, ways| total.checked_add(ways?));
        assert_eq!(sum, None);
    }

    #[test]
    fn negative_steps_are_a_domain_error() {
        assert_eq!(count_ways(-3), Err(Error::Domain(DomainError::NegativeSteps { n: -3 })));
        assert_eq!(count_table(-1), Err(Error::Domain(DomainError::NegativeSteps { n: -1 })));
    }
}
