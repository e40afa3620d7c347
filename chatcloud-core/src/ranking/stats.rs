//! Statistics and CorpusStats.

use crate::ranking::table::FrequencyTable;

/// A snapshot of counting-pass statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Number of input lines read, including empty ones.
    pub lines_read: usize,
    /// Number of empty lines skipped.
    pub lines_skipped: usize,
    /// Total units extracted.
    pub units_total: u64,
    /// Number of distinct units.
    pub distinct_units: usize,
    /// Number of units written to the ranking, if ranked.
    pub ranked_units: Option<usize>,
}

impl FrequencyTable {
    /// Returns table statistics; line counters are left at zero.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            units_total: self.total,
            distinct_units: self.counts.len(),
            ..CorpusStats::default()
        }
    }
}

impl CorpusStats {
    /// Number of lines that contributed units.
    pub fn lines_analyzed(&self) -> usize {
        self.lines_read.saturating_sub(self.lines_skipped)
    }

    /// Average number of units per analyzed line.
    pub fn units_per_line(&self) -> f64 {
        let analyzed = self.lines_analyzed();
        if analyzed > 0 {
            self.units_total as f64 / analyzed as f64
        } else {
            0.0
        }
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} lines ({} empty), {} units, {} distinct",
            self.lines_read, self.lines_skipped, self.units_total, self.distinct_units
        )?;

        if let Some(ranked) = self.ranked_units {
            write!(f, ", {} ranked", ranked)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_from_table() {
        let mut t = FrequencyTable::new();
        t.extend(["a", "b", "a"]);
        let s = t.stats();
        assert_eq!(s.units_total, 3);
        assert_eq!(s.distinct_units, 2);
        assert_eq!(s.lines_read, 0);
    }

    #[test]
    fn per_line_average() {
        let s = CorpusStats {
            lines_read: 5,
            lines_skipped: 1,
            units_total: 10,
            ..CorpusStats::default()
        };
        assert_eq!(s.lines_analyzed(), 4);
        assert_eq!(s.units_per_line(), 2.5);
        assert_eq!(CorpusStats::default().units_per_line(), 0.0);
    }

    #[test]
    fn display() {
        let mut s = CorpusStats {
            lines_read: 4,
            lines_skipped: 1,
            units_total: 5,
            distinct_units: 3,
            ranked_units: None,
        };
        assert_eq!(s.to_string(), "4 lines (1 empty), 5 units, 3 distinct");
        s.ranked_units = Some(3);
        assert_eq!(s.to_string(), "4 lines (1 empty), 5 units, 3 distinct, 3 ranked");
    }
}
