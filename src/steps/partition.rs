use std::iter::FusedIterator;

use crate::steps::multinomial::multinomial;

/// How many 3-, 2- and 1-step moves make up one way of climbing.
///
/// A partition fixes the multiset of moves, not their order; every ordering
/// of it is a distinct way up the staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    /// Number of 3-step moves.
    pub threes: u64,
    /// Number of 2-step moves.
    pub twos:   u64,
    /// Number of 1-step moves.
    pub ones:   u64,
}

impl Partition {
    /// Keeps `threes` 3-step moves and covers the rest of `steps` with as few
    /// moves as possible.
    ///
    /// Callers keep `threes * 3` within `steps`: [`Partitions`] only passes
    /// `steps / 3` or a smaller count it has already visited.
    const fn with_threes(threes: u64, steps: u64) -> Self {
        let rest = steps - 3 * threes;
        Self { threes,
               twos: rest / 2,
               ones: rest % 2 }
    }

    /// Total number of moves.
    #[must_use]
    pub const fn moves(&self) -> u64 {
        self.threes + self.twos + self.ones
    }

    /// Number of steps climbed.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        3 * self.threes + 2 * self.twos + self.ones
    }

    /// Number of distinct orderings of the moves, or `None` if it does not
    /// fit in a `u128`.
    ///
    /// # Example
    /// ```
    /// use infix_stairs::steps::Partition;
    ///
    /// // 3 2 1 can be climbed as 321, 312, 231, 213, 132 and 123.
    /// let partition = Partition { threes: 1,
    ///                             twos:   1,
    ///                             ones:   1, };
    /// assert_eq!(partition.arrangements(), Some(6));
    /// ```
    #[must_use]
    pub fn arrangements(&self) -> Option<u128> {
        multinomial(&[self.threes, self.twos, self.ones])
    }
}

/// Iterates every partition of a staircase, most 3-step moves first.
///
/// Starting from the partition with the most 3-step moves, each 2-step move
/// is traded for two 1-step moves in turn; once no 2-step move is left, one
/// 3-step move is given up and the remainder is again covered with as many
/// 2-step moves as possible. The last partition is all 1-step moves.
///
/// # Example
/// ```
/// use infix_stairs::steps::Partitions;
///
/// let order: Vec<_> = Partitions::new(4).map(|p| (p.threes, p.twos, p.ones)).collect();
/// assert_eq!(order, [(1, 0, 1), (0, 2, 0), (0, 1, 2), (0, 0, 4)]);
/// ```
#[derive(Debug, Clone)]
pub struct Partitions {
    steps: u64,
    next:  Option<Partition>,
}

impl Partitions {
    /// Starts the enumeration for a staircase of `steps` steps.
    #[must_use]
    pub const fn new(steps: u64) -> Self {
        Self { steps,
               next: Some(Partition::with_threes(steps / 3, steps)) }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        self.next = if current.twos > 0 {
            Some(Partition { twos: current.twos - 1,
                             ones: current.ones + 2,
                             ..current })
        } else if current.threes > 0 {
            Some(Partition::with_threes(current.threes - 1, self.steps))
        } else {
            None
        };

        Some(current)
    }
}

impl FusedIterator for Partitions {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn triples(steps: u64) -> Vec<(u64, u64, u64)> {
        Partitions::new(steps).map(|p| (p.threes, p.twos, p.ones)).collect()
    }

    #[test]
    fn enumerates_six_steps_in_order() {
        assert_eq!(triples(6),
                   [(2, 0, 0), (1, 1, 1), (1, 0, 3), (0, 3, 0), (0, 2, 2), (0, 1, 4), (0, 0, 6)]);
    }

    #[test]
    fn zero_steps_has_only_the_empty_partition() {
        assert_eq!(triples(0), [(0, 0, 0)]);
    }

    #[test]
    fn small_staircases_start_from_the_remainder() {
        assert_eq!(triples(1), [(0, 0, 1)]);
        assert_eq!(triples(2), [(0, 1, 0), (0, 0, 2)]);
        assert_eq!(triples(5), [(1, 1, 0), (1, 0, 2), (0, 2, 1), (0, 1, 3), (0, 0, 5)]);
    }

    #[test]
    fn every_partition_covers_the_staircase_once() {
        for steps in 0..60 {
            let all: Vec<Partition> = Partitions::new(steps).collect();

            assert!(all.iter().all(|p| p.steps() == steps && p.moves() <= steps));

            let mut unique = all.clone();
            unique.sort_by_key(|p| (p.threes, p.twos, p.ones));
            unique.dedup();
            assert_eq!(unique.len(), all.len());

            // One partition per (threes, twos) pair with 3a + 2b <= steps.
            let expected: u64 = (0..=steps / 3).map(|a| (steps - 3 * a) / 2 + 1).sum();
            assert_eq!(all.len() as u64, expected);
        }
    }

    #[test]
    fn the_largest_staircase_enumerates_without_overflow() {
        let third = u64::MAX / 3;
        let first: Vec<Partition> = Partitions::new(u64::MAX).take(3).collect();

        assert_eq!(first,
                   [Partition { threes: third,
                                twos:   0,
                                ones:   0, },
                    Partition { threes: third - 1,
                                twos:   1,
                                ones:   1, },
                    Partition { threes: third - 1,
                                twos:   0,
                                ones:   3, }]);
        assert!(first.iter().all(|p| p.steps() == u64::MAX));
    }

    #[test]
    fn iterator_stays_exhausted() {
        let mut partitions = Partitions::new(1);
        assert!(partitions.next().is_some());
        assert_eq!(partitions.next(), None);
        assert_eq!(partitions.next(), None);
    }
}
