//! Pipeline configuration.
//!
//! Every field defaults to the values of the original deployment: fixed
//! resource paths under `src/main/resources`, N = 500 and a repeat factor of 27.

use std::path::PathBuf;

use crate::analyzer::preprocessor::Sentinels;
use crate::analyzer::segmenter::EmojiSet;
use crate::error::{ChatCloudError, Result};

pub const DEFAULT_INPUT_PATH: &str = "src/main/resources/chat.txt";
pub const DEFAULT_INTERMEDIATE_PATH: &str = "src/main/resources/output.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "src/main/resources/final_output.txt";
pub const DEFAULT_LOOKUP_DIR: &str = "src/main/resources/data/normalization";
pub const DEFAULT_LANGUAGE_MODEL: &str = "src/main/resources/data/lm/lm.2gram.slm";

/// Number of units kept by the ranker.
pub const DEFAULT_TOP_N: usize = 500;

/// Repeat factor used when a count cannot be parsed.
pub const DEFAULT_REPEAT: usize = 27;

/// Where the normalizer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizerSource {
    /// Pass sentences through untouched.
    Identity,
    /// Load a [`LookupNormalizer`](crate::analyzer::normalizer::LookupNormalizer).
    Lookup {
        lookup_dir: PathBuf,
        language_model: Option<PathBuf>,
    },
}

impl Default for NormalizerSource {
    fn default() -> Self {
        Self::Lookup {
            lookup_dir: PathBuf::from(DEFAULT_LOOKUP_DIR),
            language_model: Some(PathBuf::from(DEFAULT_LANGUAGE_MODEL)),
        }
    }
}

/// Configuration for a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Exported chat log, one message per line.
    pub input_path: PathBuf,
    /// `unit=count` ranking written by the first pass.
    pub intermediate_path: PathBuf,
    /// Word-cloud lines written by the second pass.
    pub output_path: PathBuf,
    /// Maximum number of ranked units.
    pub top_n: usize,
    /// Substitute repeat factor for unreadable counts.
    pub default_repeat: usize,
    pub emoji: EmojiSet,
    /// Keep a U+FE0F that follows an emoji in the emoji's unit.
    pub keep_variation_selector: bool,
    pub sentinels: Sentinels,
    pub normalizer: NormalizerSource,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            intermediate_path: PathBuf::from(DEFAULT_INTERMEDIATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            top_n: DEFAULT_TOP_N,
            default_repeat: DEFAULT_REPEAT,
            emoji: EmojiSet::default(),
            keep_variation_selector: false,
            sentinels: Sentinels::default(),
            normalizer: NormalizerSource::default(),
        }
    }
}

impl PipelineConfig {
    /// Checks the configuration before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns `ChatCloudError::Config` if the repeat factor is zero, a
    /// sentinel is empty, or an output path would overwrite the input.
    pub fn validate(&self) -> Result<()> {
        if self.default_repeat == 0 {
            return Err(ChatCloudError::Config(
                "default repeat factor must be at least 1".to_string(),
            ));
        }

        let s = &self.sentinels;
        if s.media_placeholder.is_empty() || s.media.is_empty() || s.link.is_empty() {
            return Err(ChatCloudError::Config(
                "sentinels and the media placeholder must be non-empty".to_string(),
            ));
        }

        for out in [&self.intermediate_path, &self.output_path] {
            if *out == self.input_path {
                return Err(ChatCloudError::Config(format!(
                    "output path {} would overwrite the input",
                    out.display()
                )));
            }
        }

        if self.intermediate_path == self.output_path {
            return Err(ChatCloudError::Config(
                "intermediate and final output paths must differ".to_string(),
            ));
        }

        Ok(())
    }
}
