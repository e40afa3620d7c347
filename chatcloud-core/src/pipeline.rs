//! Batch pipeline driver.
//!
//! Runs the two sequential passes over the configured files:
//!
//! 1. chat log -> analyzer -> frequency table -> top-N -> ranking file
//! 2. ranking file -> cloud formatter -> word-cloud file
//!
//! Any I/O failure aborts the run; there is no partial-success mode.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use chatcloud_types::RankedUnit;
use tracing::{debug, info};

use crate::analyzer::{Analyzer, IdentityNormalizer, LookupNormalizer, Normalizer, Segmenter};
use crate::cloud::{CloudFormatter, CloudReport};
use crate::config::{NormalizerSource, PipelineConfig};
use crate::error::{ChatCloudError, Result};
use crate::ranking::{write_ranking, CorpusStats, FrequencyTable};

/// Outcome of a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub corpus: CorpusStats,
    pub cloud: CloudReport,
}

/// Configured pipeline with its analyzer.
pub struct Pipeline<N> {
    config: PipelineConfig,
    analyzer: Analyzer<N>,
    formatter: CloudFormatter,
}

impl Pipeline<Box<dyn Normalizer>> {
    /// Builds a pipeline, loading the normalizer named by the configuration.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration or unreadable normalizer resources.
    pub fn from_config(config: PipelineConfig) -> Result<Self> {
        let normalizer: Box<dyn Normalizer> = match &config.normalizer {
            NormalizerSource::Identity => Box::new(IdentityNormalizer),
            NormalizerSource::Lookup {
                lookup_dir,
                language_model,
            } => Box::new(LookupNormalizer::from_paths(
                lookup_dir,
                language_model.as_deref(),
            )?),
        };
        Self::new(config, normalizer)
    }
}

impl<N: Normalizer> Pipeline<N> {
    /// Builds a pipeline around an already constructed normalizer.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration or an emoji class that does not compile.
    pub fn new(config: PipelineConfig, normalizer: N) -> Result<Self> {
        config.validate()?;
        let segmenter = if config.keep_variation_selector {
            Segmenter::with_variation_selector(&config.emoji)?
        } else {
            Segmenter::new(&config.emoji)?
        };
        let analyzer = Analyzer::new(normalizer, config.sentinels.clone(), segmenter);
        let formatter = CloudFormatter::new(config.default_repeat);
        Ok(Self {
            config,
            analyzer,
            formatter,
        })
    }

    /// Counts the units of every non-empty line of `input`.
    pub fn count<R: BufRead>(&self, input: R) -> std::io::Result<(FrequencyTable, CorpusStats)> {
        let mut table = FrequencyTable::new();
        let mut lines_read = 0usize;
        let mut lines_skipped = 0usize;

        for line in input.lines() {
            let line = line?;
            lines_read += 1;

            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() {
                lines_skipped += 1;
                continue;
            }

            self.analyzer.analyze_with(line, |unit| table.record(unit));
        }

        let stats = CorpusStats {
            lines_read,
            lines_skipped,
            ..table.stats()
        };
        Ok((table, stats))
    }

    /// Selects the configured number of top units.
    #[inline]
    pub fn rank(&self, table: &FrequencyTable) -> Vec<RankedUnit> {
        table.top_n(self.config.top_n)
    }

    /// Runs both passes over the configured files.
    ///
    /// # Errors
    ///
    /// Returns `ChatCloudError::Io` naming the file that failed.
    pub fn run(&self) -> Result<RunReport> {
        let cfg = &self.config;

        let input = open(&cfg.input_path)?;
        let (table, mut corpus) = self
            .count(input)
            .map_err(|e| ChatCloudError::io(&cfg.input_path, e))?;
        info!(%corpus, "counted units");

        let ranked = self.rank(&table);
        corpus.ranked_units = Some(ranked.len());
        debug!(top_n = cfg.top_n, ranked = ranked.len(), "selected top units");

        let ranking = create(&cfg.intermediate_path)?;
        write_ranking(&ranked, ranking).map_err(|e| ChatCloudError::io(&cfg.intermediate_path, e))?;
        info!(path = %cfg.intermediate_path.display(), "ranking written");

        let cloud = self.format_cloud(&cfg.intermediate_path, &cfg.output_path)?;
        info!(
            path = %cfg.output_path.display(),
            lines = cloud.lines_written,
            recovered = cloud.counts_recovered,
            "word cloud written"
        );

        Ok(RunReport { corpus, cloud })
    }

    /// Runs only the formatting pass from `ranking` to `output`.
    pub fn format_cloud(&self, ranking: &Path, output: &Path) -> Result<CloudReport> {
        let input = open(ranking)?;
        let out = create(output)?;
        // Read and write failures are indistinguishable here; report the output.
        self.formatter
            .format_stream(input, out)
            .map_err(|e| ChatCloudError::io(output, e))
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| ChatCloudError::io(path, e))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ChatCloudError::io(path, e))
}
