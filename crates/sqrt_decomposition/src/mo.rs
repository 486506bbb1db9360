//! Mo's algorithm: square-root decomposition over queries instead of data.
//!
//! Queries are answered offline by sliding a window `[l, r)` over the
//! caller's sequence. Sorting queries by the block of their start and then
//! by their end bounds the total window movement by *O*((*n* + *q*)√*n*).

use std::ops::Range;

use tracing::debug;

use crate::RangeError;

/// Window state maintained by [`solve`].
///
/// The window is always a half-open `[l, r)` with `l <= r`; it starts empty
/// at `[0, 0)`.
pub trait MoState {
    type Output;

    /// `index == r` joins the window, which becomes `[l, r + 1)`.
    fn push_back(&mut self, index: usize);

    /// `index == r - 1` leaves the window, which becomes `[l, r - 1)`.
    fn pop_back(&mut self, index: usize);

    /// `index == l - 1` joins the window, which becomes `[l - 1, r)`.
    fn push_front(&mut self, index: usize);

    /// `index == l` leaves the window, which becomes `[l + 1, r)`.
    fn pop_front(&mut self, index: usize);

    fn answer(&self) -> Self::Output;
}

/// Visiting order of `queries`: by `start / block_size`, then by `end`,
/// ascending on even blocks and descending on odd ones.
pub fn mo_order(queries: &[Range<usize>], block_size: usize) -> Result<Vec<usize>, RangeError> {
    if block_size == 0 {
        return Err(RangeError::InvalidConfiguration { block_size });
    }

    let mut order = (0..queries.len()).collect::<Vec<_>>();
    order.sort_unstable_by_key(|&i| {
        let query = &queries[i];
        let block = query.start / block_size;
        let end = if block % 2 == 0 {
            query.end
        } else {
            usize::MAX - query.end
        };
        (block, end, i)
    });
    Ok(order)
}

fn mo_block_size(len: usize, queries: usize) -> usize {
    (len / queries.isqrt().max(1)).max(1)
}

/// Answers every query over a sequence of length `len`, in input order.
///
/// Empty queries (`start == end`) are allowed and see an empty window.
/// Any query with `start > end` or `end > len` is rejected before `state`
/// is touched.
pub fn solve<S: MoState>(
    mut state: S,
    len: usize,
    queries: &[Range<usize>],
) -> Result<Vec<S::Output>, RangeError> {
    if let Some(query) = queries.iter().find(|q| q.start > q.end || q.end > len) {
        return Err(RangeError::InvalidRange {
            start: query.start,
            end: query.end,
            len,
        });
    }

    let block_size = mo_block_size(len, queries.len());
    let order = mo_order(queries, block_size)?;
    debug!(len, queries = queries.len(), block_size, "solving offline queries");

    let mut answers = (0..queries.len()).map(|_| None).collect::<Vec<_>>();
    let (mut l, mut r) = (0_usize, 0_usize);
    for i in order {
        let query = &queries[i];
        // Grow before shrinking so the window never inverts.
        while l > query.start {
            l -= 1;
            state.push_front(l);
        }
        while r < query.end {
            state.push_back(r);
            r += 1;
        }
        while l < query.start {
            state.pop_front(l);
            l += 1;
        }
        while r > query.end {
            r -= 1;
            state.pop_back(r);
        }
        answers[i] = Some(state.answer());
    }
    Ok(answers.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::ops::Range;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{MoState, mo_order, solve};
    use crate::RangeError;

    struct DistinctCount<'a> {
        values: &'a [u32],
        counts: Vec<usize>,
        distinct: usize,
    }

    impl<'a> DistinctCount<'a> {
        fn new(values: &'a [u32]) -> Self {
            let max = values.iter().copied().max().unwrap_or(0) as usize;
            Self {
                values,
                counts: vec![0; max + 1],
                distinct: 0,
            }
        }

        fn add(&mut self, index: usize) {
            let count = &mut self.counts[self.values[index] as usize];
            if *count == 0 {
                self.distinct += 1;
            }
            *count += 1;
        }

        fn remove(&mut self, index: usize) {
            let count = &mut self.counts[self.values[index] as usize];
            *count -= 1;
            if *count == 0 {
                self.distinct -= 1;
            }
        }
    }

    impl MoState for DistinctCount<'_> {
        type Output = usize;

        fn push_back(&mut self, index: usize) {
            self.add(index);
        }

        fn pop_back(&mut self, index: usize) {
            self.remove(index);
        }

        fn push_front(&mut self, index: usize) {
            self.add(index);
        }

        fn pop_front(&mut self, index: usize) {
            self.remove(index);
        }

        fn answer(&self) -> usize {
            self.distinct
        }
    }

    /// Records the window bounds to check the calling contract.
    #[derive(Default)]
    struct WindowTracker {
        l: usize,
        r: usize,
    }

    impl MoState for WindowTracker {
        type Output = Range<usize>;

        fn push_back(&mut self, index: usize) {
            assert_eq!(index, self.r);
            self.r += 1;
        }

        fn pop_back(&mut self, index: usize) {
            assert_eq!(index + 1, self.r);
            assert!(self.l < self.r);
            self.r -= 1;
        }

        fn push_front(&mut self, index: usize) {
            assert_eq!(index + 1, self.l);
            self.l -= 1;
        }

        fn pop_front(&mut self, index: usize) {
            assert_eq!(index, self.l);
            assert!(self.l < self.r);
            self.l += 1;
        }

        fn answer(&self) -> Range<usize> {
            self.l..self.r
        }
    }

    fn brute_force_distinct(values: &[u32], range: Range<usize>) -> usize {
        values[range].iter().collect::<HashSet<_>>().len()
    }

    #[test]
    fn known_distinct_counts() {
        let values = [1, 2, 1, 3, 2, 2, 4];
        let queries = [0..3, 1..5, 0..7, 5..6, 3..3, 2..4];
        let answers = solve(DistinctCount::new(&values), values.len(), &queries).unwrap();
        assert_eq!(answers, vec![2, 3, 4, 1, 0, 2]);
    }

    #[test]
    fn window_follows_queries() {
        let queries = [4..9, 0..2, 7..7, 3..10, 1..6, 9..10];
        let answers = solve(WindowTracker::default(), 10, &queries).unwrap();
        assert_eq!(answers, queries.to_vec());
    }

    #[test]
    fn invalid_query_is_rejected() {
        assert_eq!(
            solve(WindowTracker::default(), 5, &[0..2, 1..6]),
            Err(RangeError::InvalidRange {
                start: 1,
                end: 6,
                len: 5
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = [3..1];
        assert!(solve(WindowTracker::default(), 5, &inverted).is_err());
        assert_eq!(solve(WindowTracker::default(), 0, &[]), Ok(Vec::new()));
    }

    #[test]
    fn order_alternates_direction() {
        let queries = [0..5, 0..2, 3..9, 3..4, 4..6];
        // starts 0 fall in block 0, starts 3 and 4 in block 1
        assert_eq!(mo_order(&queries, 3), Ok(vec![1, 0, 2, 4, 3]));
        assert_eq!(
            mo_order(&queries, 0),
            Err(RangeError::InvalidConfiguration { block_size: 0 })
        );
    }

    #[test]
    fn random_cases_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for n in 1..80 {
            let values = (0..n).map(|_| rng.random_range(0..10)).collect::<Vec<u32>>();
            let queries = (0..200)
                .map(|_| {
                    let l = rng.random_range(0..=n);
                    let r = rng.random_range(l..=n);
                    l..r
                })
                .collect::<Vec<_>>();

            let answers = solve(DistinctCount::new(&values), n, &queries).unwrap();
            for (query, answer) in queries.iter().zip(answers) {
                assert_eq!(answer, brute_force_distinct(&values, query.clone()), "n={n}");
            }
        }
    }
}
