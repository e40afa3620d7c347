//! Bounded top-N selection.
//!
//! Keeps at most `n` entries in a min-heap keyed by count. Each new entry is
//! compared against the current minimum; once the heap is full, entries that
//! cannot beat it are skipped without touching the heap. Unit text is only
//! copied for the survivors.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use chatcloud_types::{Count, RankedUnit};

/// Borrowed heap entry, ordered like [`RankedUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate<'a> {
    count: Count,
    unit: &'a str,
}

impl PartialOrd for Candidate<'_> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        // Smaller text ranks higher on equal counts.
        match self.count.cmp(&other.count) {
            Ordering::Equal => other.unit.cmp(self.unit),
            ord => ord,
        }
    }
}

/// Selects the `n` highest-count entries, sorted by count descending.
///
/// Equal counts are ordered by unit text ascending, so the result does not
/// depend on the iteration order of `entries`.
pub fn select_top_n<'a, I>(entries: I, n: usize) -> Vec<RankedUnit>
where
    I: IntoIterator<Item = (&'a str, Count)>,
{
    if n == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<Candidate<'a>>> = BinaryHeap::with_capacity(n + 1);

    for (unit, count) in entries {
        let candidate = Candidate { count, unit };
        if heap.len() < n {
            heap.push(Reverse(candidate));
            continue;
        }
        if let Some(mut min) = heap.peek_mut() {
            // Replacing through `PeekMut` evicts the minimum and re-sifts on drop.
            if candidate > min.0 {
                *min = Reverse(candidate);
            }
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(c)| RankedUnit::new(c.unit, c.count))
        .collect()
}
