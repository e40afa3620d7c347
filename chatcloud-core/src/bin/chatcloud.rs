//! Chat Word-Cloud Tool
//!
//! Reads an exported chat log and produces two files:
//!
//! 1. **Ranking**: the most frequent units as `unit=count` lines
//! 2. **Word cloud**: each ranked unit repeated `count` times
//!
//! ## Usage
//!
//! ```bash
//! # Defaults match the original resource layout under src/main/resources
//! ./target/release/chatcloud
//!
//! # Explicit paths, no lookup normalizer, top 100 units
//! ./target/release/chatcloud --input chat.txt --output ranking.txt \
//!     --final-output cloud.txt --identity --top-n 100
//!
//! # Wider emoji detection
//! ./target/release/chatcloud --emoji pictographic
//! ```
//!
//! ## Logging
//!
//! `-v` enables debug output, `-vv` trace output. `RUST_LOG` overrides both.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use chatcloud_core::analyzer::segmenter::EmojiSet;
use chatcloud_core::config::{
    DEFAULT_INPUT_PATH, DEFAULT_INTERMEDIATE_PATH, DEFAULT_LANGUAGE_MODEL, DEFAULT_LOOKUP_DIR,
    DEFAULT_OUTPUT_PATH, DEFAULT_REPEAT, DEFAULT_TOP_N,
};
use chatcloud_core::{NormalizerSource, Pipeline, PipelineConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EmojiArg {
    /// Unicode Emoticons block only (U+1F600..U+1F64F)
    Emoticons,
    /// Every Extended_Pictographic code point
    Pictographic,
}

#[derive(Debug, Parser)]
#[command(name = "chatcloud")]
#[command(about = "Rank the most frequent words and emoji of a chat export for word clouds")]
#[command(version)]
struct Cli {
    /// Exported chat log
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Ranking file (`unit=count` lines)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INTERMEDIATE_PATH)]
    output: PathBuf,

    /// Word-cloud file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    final_output: PathBuf,

    /// Directory of `informal=candidate` lookup files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_LOOKUP_DIR)]
    lookup_dir: PathBuf,

    /// Unigram language model (`word frequency` lines)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LANGUAGE_MODEL)]
    language_model: PathBuf,

    /// Skip the language model and pick the first lookup candidate
    #[arg(long, conflicts_with = "identity")]
    no_language_model: bool,

    /// Do not normalize; count the text as written
    #[arg(long)]
    identity: bool,

    /// Number of units to keep
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Repeat factor for counts that cannot be read
    #[arg(long, value_name = "N", default_value_t = DEFAULT_REPEAT)]
    default_repeat: usize,

    /// Built-in emoji class
    #[arg(long, value_enum, default_value = "emoticons")]
    emoji: EmojiArg,

    /// Custom emoji character class body, e.g. '\x{1F300}-\x{1FAFF}'
    #[arg(long, value_name = "CLASS", conflicts_with = "emoji")]
    emoji_class: Option<String>,

    /// Keep a U+FE0F variation selector attached to the emoji before it
    #[arg(long)]
    keep_variation_selector: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> PipelineConfig {
        let emoji = match (self.emoji_class, self.emoji) {
            (Some(class), _) => EmojiSet::Custom(class),
            (None, EmojiArg::Emoticons) => EmojiSet::Emoticons,
            (None, EmojiArg::Pictographic) => EmojiSet::Pictographic,
        };

        let normalizer = if self.identity {
            NormalizerSource::Identity
        } else {
            NormalizerSource::Lookup {
                lookup_dir: self.lookup_dir,
                language_model: (!self.no_language_model).then_some(self.language_model),
            }
        };

        PipelineConfig {
            input_path: self.input,
            intermediate_path: self.output,
            output_path: self.final_output,
            top_n: self.top_n,
            default_repeat: self.default_repeat,
            emoji,
            keep_variation_selector: self.keep_variation_selector,
            normalizer,
            ..PipelineConfig::default()
        }
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.into_config();
    let start = Instant::now();

    let pipeline = Pipeline::from_config(config).context("failed to set up pipeline")?;
    let report = pipeline.run().context("pipeline run failed")?;

    let elapsed = start.elapsed();
    info!(
        lines = %fmt_count(report.corpus.lines_read as u64),
        units = %fmt_count(report.corpus.units_total),
        distinct = %fmt_count(report.corpus.distinct_units as u64),
        cloud_lines = report.cloud.lines_written,
        elapsed_ms = elapsed.as_millis() as u64,
        "done"
    );

    Ok(())
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_config() {
        let cli = Cli::parse_from(["chatcloud"]);
        assert_eq!(cli.into_config(), PipelineConfig::default());
    }

    #[test]
    fn identity_and_paths() {
        let cli = Cli::parse_from([
            "chatcloud",
            "--input",
            "in.txt",
            "--output",
            "rank.txt",
            "--final-output",
            "cloud.txt",
            "--identity",
            "--top-n",
            "10",
        ]);
        let c = cli.into_config();
        assert_eq!(c.input_path, PathBuf::from("in.txt"));
        assert_eq!(c.intermediate_path, PathBuf::from("rank.txt"));
        assert_eq!(c.output_path, PathBuf::from("cloud.txt"));
        assert_eq!(c.normalizer, NormalizerSource::Identity);
        assert_eq!(c.top_n, 10);
    }

    #[test]
    fn emoji_options() {
        let c = Cli::parse_from(["chatcloud", "--emoji", "pictographic"]).into_config();
        assert_eq!(c.emoji, EmojiSet::Pictographic);

        let c = Cli::parse_from(["chatcloud", "--emoji-class", "a-z"]).into_config();
        assert_eq!(c.emoji, EmojiSet::Custom("a-z".to_string()));

        let c = Cli::parse_from(["chatcloud", "--keep-variation-selector"]).into_config();
        assert!(c.keep_variation_selector);
    }

    #[test]
    fn no_language_model() {
        let c = Cli::parse_from(["chatcloud", "--no-language-model"]).into_config();
        assert!(matches!(
            c.normalizer,
            NormalizerSource::Lookup {
                language_model: None,
                ..
            }
        ));
    }

    #[test]
    fn count_formatting() {
        assert_eq!(fmt_count(0), "0");
        assert_eq!(fmt_count(999), "999");
        assert_eq!(fmt_count(1_000), "1_000");
        assert_eq!(fmt_count(154_892_341), "154_892_341");
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
