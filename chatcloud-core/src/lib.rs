//! Chat-log word frequency ranking for word-cloud rendering.
//!
//! The crate reads an exported chat log, normalizes and tokenizes every
//! message, counts units (words and emoji) and writes the most frequent ones
//! in a form a word-cloud generator can consume directly.
//!
//! ```no_run
//! use chatcloud_core::{Pipeline, PipelineConfig};
//!
//! let pipeline = Pipeline::from_config(PipelineConfig::default())?;
//! let report = pipeline.run()?;
//! println!("{}", report.corpus);
//! # Ok::<(), chatcloud_core::ChatCloudError>(())
//! ```
//!
//! Threading: everything runs on the calling thread in two sequential passes.

pub mod analyzer;
pub mod cloud;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ranking;

pub use analyzer::{Analyzer, IdentityNormalizer, LookupNormalizer, Normalizer};
pub use cloud::{CloudFormatter, CloudReport};
pub use config::{NormalizerSource, PipelineConfig};
pub use error::{ChatCloudError, Result};
pub use pipeline::{Pipeline, RunReport};
pub use ranking::{CorpusStats, FrequencyTable};
