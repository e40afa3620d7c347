//! Unit frequency table.

use chatcloud_types::{Count, RankedUnit};
use rustc_hash::FxHashMap;

use crate::ranking::select::select_top_n;

/// Occurrence counts keyed by unit text.
///
/// Keys are unique; counts only grow. The total is tracked alongside so the
/// sum of all counts is available without a scan.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    pub(crate) counts: FxHashMap<String, Count>,
    pub(crate) total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `unit`.
    ///
    /// Allocates only the first time a unit is seen.
    #[inline]
    pub fn record(&mut self, unit: &str) {
        match self.counts.get_mut(unit) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.counts.insert(unit.to_owned(), 1);
            }
        }
        self.total += 1;
    }

    /// Count for `unit`, or 0 if it was never recorded.
    #[inline]
    pub fn get(&self, unit: &str) -> Count {
        self.counts.get(unit).copied().unwrap_or(0)
    }

    /// Number of distinct units.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of recorded occurrences.
    #[inline(always)]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterates `(unit, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Returns the `n` most frequent units, highest count first.
    ///
    /// Equal counts are ordered by unit text ascending.
    pub fn top_n(&self, n: usize) -> Vec<RankedUnit> {
        select_top_n(self.iter(), n)
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for unit in iter {
            self.record(unit);
        }
    }
}
