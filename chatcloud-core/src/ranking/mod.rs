//! Frequency counting and ranking.
//!
//! Counting is a single pass into a [`FrequencyTable`]; ranking is a bounded
//! heap selection over the finished table. The table is never mutated once
//! ranking starts.
//!
//! Output format, one entry per line, highest count first:
//!
//! ```text
//! hi=3
//! there=1
//! ```

mod select;
mod stats;
mod table;

pub use select::select_top_n;
pub use stats::CorpusStats;
pub use table::FrequencyTable;

use std::io::Write;

use chatcloud_types::RankedUnit;

/// Writes `ranked` as `unit=count` lines.
pub fn write_ranking<W: Write>(ranked: &[RankedUnit], mut out: W) -> std::io::Result<()> {
    for entry in ranked {
        writeln!(out, "{}", entry)?;
    }
    out.flush()
}
