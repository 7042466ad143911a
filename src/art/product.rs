//! Lazy cross product of the per-row guess pools
//!
//! The product can run to hundreds of billions of combinations, so it is
//! never materialized. Row 0 varies slowest and the last row fastest, each
//! pool keeping its dictionary order.

use crate::core::Word;
use itertools::{Itertools, MultiProduct};
use std::iter::{Copied, FusedIterator};
use std::slice;

type RowIter<'p, 'a> = Copied<slice::Iter<'p, &'a Word>>;

enum State<'p, 'a> {
    Rows(MultiProduct<RowIter<'p, 'a>>),
    /// Zero rows: the single empty combination, not yet yielded
    Unit,
    Done,
}

/// Iterator over guess combinations, one word per row
///
/// Dropping it cancels the enumeration; once exhausted it stays exhausted.
pub struct Combinations<'p, 'a> {
    state: State<'p, 'a>,
    total: u128,
    yielded: u128,
}

impl<'p, 'a> Combinations<'p, 'a> {
    #[must_use]
    pub fn new(pools: &'p [Vec<&'a Word>]) -> Self {
        let total = product_size(pools);
        let state = if pools.is_empty() {
            State::Unit
        } else if total == 0 {
            State::Done
        } else {
            State::Rows(
                pools
                    .iter()
                    .map(|pool| pool.iter().copied())
                    .multi_cartesian_product(),
            )
        };

        Self {
            state,
            total,
            yielded: 0,
        }
    }

    /// Size of the whole product, saturating at `u128::MAX`
    #[must_use]
    pub const fn total(&self) -> u128 {
        self.total
    }

    /// Combinations produced so far
    #[must_use]
    pub const fn yielded(&self) -> u128 {
        self.yielded
    }
}

impl<'a> Iterator for Combinations<'_, 'a> {
    type Item = Vec<&'a Word>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &mut self.state {
            State::Rows(rows) => rows.next(),
            State::Unit => Some(Vec::new()),
            State::Done => None,
        };

        match next {
            Some(combination) => {
                if matches!(self.state, State::Unit) {
                    self.state = State::Done;
                }
                self.yielded += 1;
                Some(combination)
            }
            None => {
                self.state = State::Done;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total.saturating_sub(self.yielded);
        match usize::try_from(left) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Combinations<'_, '_> {}

/// Number of combinations across `pools`, saturating at `u128::MAX`
///
/// Zero if any pool is empty; one for no pools at all.
#[must_use]
pub fn product_size<T>(pools: &[Vec<T>]) -> u128 {
    pools
        .iter()
        .fold(1u128, |acc, pool| acc.saturating_mul(pool.len() as u128))
}
