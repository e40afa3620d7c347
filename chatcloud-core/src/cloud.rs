//! Word-cloud formatting.
//!
//! Word-cloud generators size words by how often they appear in their input.
//! The formatter expands each `unit=count` ranking line into the unit repeated
//! `count` times:
//!
//! ```text
//! café=3   ->   café café café
//! ```
//!
//! Counts are read as signed 32-bit integers, so a leading `+` is accepted.
//! A count that cannot be parsed, is negative or exceeds `i32::MAX` is
//! replaced by the default repeat factor and a warning is logged; the run
//! continues.

use std::io::{BufRead, Write};

use chatcloud_types::split_entry;
use tracing::warn;

use crate::config::DEFAULT_REPEAT;

/// One formatted ranking line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudLine<'a> {
    pub unit: &'a str,
    pub repeat: usize,
    /// `true` when the count was unreadable and the default factor was used.
    pub recovered: bool,
}

impl CloudLine<'_> {
    /// Writes the repeated unit and a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for _ in 0..self.repeat {
            out.write_all(self.unit.as_bytes())?;
            out.write_all(b" ")?;
        }
        out.write_all(b"\n")
    }

    /// Repeated unit text without the trailing newline.
    pub fn render(&self) -> String {
        let capacity = (self.unit.len() + 1).checked_mul(self.repeat).unwrap_or(0);
        let mut s = String::with_capacity(capacity);
        for _ in 0..self.repeat {
            s.push_str(self.unit);
            s.push(' ');
        }
        s
    }
}

/// Counters for one formatting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloudReport {
    pub lines_written: usize,
    pub lines_skipped: usize,
    pub counts_recovered: usize,
}

/// Expands ranking lines into word-cloud lines.
#[derive(Debug, Clone, Copy)]
pub struct CloudFormatter {
    default_repeat: usize,
}

impl Default for CloudFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT)
    }
}

impl CloudFormatter {
    pub const fn new(default_repeat: usize) -> Self {
        Self { default_repeat }
    }

    /// Parses one ranking line.
    ///
    /// Returns `None` for a line without `=`. An unreadable count yields the
    /// default repeat factor and a warning.
    pub fn format_line<'a>(&self, line: &'a str) -> Option<CloudLine<'a>> {
        let (unit, raw) = split_entry(line)?;
        match parse_repeat(raw) {
            Some(repeat) => Some(CloudLine {
                unit,
                repeat,
                recovered: false,
            }),
            None => {
                warn!(
                    unit,
                    count = raw,
                    fallback = self.default_repeat,
                    "repeat factor cannot be read, using default"
                );
                Some(CloudLine {
                    unit,
                    repeat: self.default_repeat,
                    recovered: true,
                })
            }
        }
    }

    /// Formats every line of `input` into `out`.
    ///
    /// # Errors
    ///
    /// Propagates read and write failures.
    pub fn format_stream<R, W>(&self, input: R, mut out: W) -> std::io::Result<CloudReport>
    where
        R: BufRead,
        W: Write,
    {
        let mut report = CloudReport::default();

        for line in input.lines() {
            let line = line?;
            match self.format_line(&line) {
                Some(cloud) => {
                    cloud.write_to(&mut out)?;
                    report.lines_written += 1;
                    if cloud.recovered {
                        report.counts_recovered += 1;
                    }
                }
                None => report.lines_skipped += 1,
            }
        }

        out.flush()?;
        Ok(report)
    }
}

/// Reads a count in the range `0..=i32::MAX`.
fn parse_repeat(raw: &str) -> Option<usize> {
    let n: i32 = raw.parse().ok()?;
    usize::try_from(n).ok()
}
