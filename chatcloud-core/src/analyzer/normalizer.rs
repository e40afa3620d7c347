//! Sentence normalization.
//!
//! Informal chat text is full of misspellings and shorthand (`"nbr"`,
//! `"tmm"`, `"cok"`). A [`Normalizer`] rewrites a sentence into its standard
//! form before tokenization. The pipeline only depends on the trait, so any
//! spell-correction service can be plugged in.
//!
//! Two implementations ship with the crate:
//!
//! - [`IdentityNormalizer`] returns its input untouched.
//! - [`LookupNormalizer`] replaces words from lookup tables, using a unigram
//!   language model to pick between competing candidates.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use chatcloud_types::TokenKind;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::tokenizer::Tokenizer;
use crate::error::{ChatCloudError, Result};

/// Rewrites a sentence into its normalized form.
pub trait Normalizer {
    fn normalize<'a>(&self, sentence: &'a str) -> Cow<'a, str>;
}

impl<N: Normalizer + ?Sized> Normalizer for &N {
    #[inline]
    fn normalize<'a>(&self, sentence: &'a str) -> Cow<'a, str> {
        (**self).normalize(sentence)
    }
}

impl<N: Normalizer + ?Sized> Normalizer for Box<N> {
    #[inline]
    fn normalize<'a>(&self, sentence: &'a str) -> Cow<'a, str> {
        (**self).normalize(sentence)
    }
}

/// Normalizer that performs no changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl Normalizer for IdentityNormalizer {
    #[inline(always)]
    fn normalize<'a>(&self, sentence: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(sentence)
    }
}

/// Table-driven normalizer.
///
/// Lookup files map an informal form to one or more standard candidates:
///
/// ```text
/// # informal=candidate[,candidate...]
/// nbr=naber
/// cok=çok
/// de=de,da
/// ```
///
/// The optional language model lists unigram frequencies, one
/// `word frequency` pair per line. When a key has several candidates the most
/// frequent one wins; ties go to the candidate listed first.
///
/// A whitespace chunk is first looked up whole. Otherwise each word inside
/// it is looked up on its own and attached punctuation is kept, so `nbr?`
/// becomes `naber?`.
///
/// Keys are matched on their lowercase form, with Turkish dotted and dotless
/// `I` folded to `i` and `ı`.
#[derive(Debug, Clone, Default)]
pub struct LookupNormalizer {
    table: FxHashMap<String, Vec<String>>,
    model: FxHashMap<String, u64>,
}

impl LookupNormalizer {
    /// Creates an empty normalizer; every word passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.txt` lookup file in `lookup_dir` (in file-name order)
    /// and, if given, the unigram model file.
    ///
    /// # Errors
    ///
    /// Returns `ChatCloudError::Io` if the directory or a file cannot be read,
    /// and `ChatCloudError::NormalizerResource` for a malformed line.
    pub fn from_paths(lookup_dir: &Path, language_model: Option<&Path>) -> Result<Self> {
        let mut normalizer = Self::new();

        let entries = fs::read_dir(lookup_dir).map_err(|e| ChatCloudError::io(lookup_dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ChatCloudError::io(lookup_dir, e))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
                files.push(path);
            }
        }
        files.sort();

        for path in &files {
            let content = fs::read_to_string(path).map_err(|e| ChatCloudError::io(path, e))?;
            normalizer.load_lookup(path, &content)?;
        }

        if let Some(path) = language_model {
            let content = fs::read_to_string(path).map_err(|e| ChatCloudError::io(path, e))?;
            normalizer.load_model(path, &content)?;
        }

        debug!(
            files = files.len(),
            keys = normalizer.table.len(),
            model_words = normalizer.model.len(),
            "lookup normalizer loaded"
        );

        Ok(normalizer)
    }

    /// Adds lookup entries from `content`; `origin` names it in errors.
    pub fn load_lookup(&mut self, origin: &Path, content: &str) -> Result<()> {
        for (idx, line) in resource_lines(content) {
            let (key, candidates) =
                line.split_once('=')
                    .ok_or_else(|| ChatCloudError::NormalizerResource {
                        path: origin.to_path_buf(),
                        line: idx,
                        reason: "expected informal=candidate".to_string(),
                    })?;

            let key = fold_key(key.trim());
            if key.is_empty() {
                return Err(ChatCloudError::NormalizerResource {
                    path: origin.to_path_buf(),
                    line: idx,
                    reason: "empty lookup key".to_string(),
                });
            }

            let slot = self.table.entry(key).or_default();
            for candidate in candidates.split(',').map(str::trim) {
                if !candidate.is_empty() && !slot.iter().any(|c| c == candidate) {
                    slot.push(candidate.to_string());
                }
            }
        }
        Ok(())
    }

    /// Adds unigram frequencies from `content`; `origin` names it in errors.
    pub fn load_model(&mut self, origin: &Path, content: &str) -> Result<()> {
        for (idx, line) in resource_lines(content) {
            let bad = |reason: &str| ChatCloudError::NormalizerResource {
                path: origin.to_path_buf(),
                line: idx,
                reason: reason.to_string(),
            };

            let mut fields = line.split_whitespace();
            let (Some(word), Some(freq), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(bad("expected `word frequency`"));
            };
            let freq: u64 = freq.parse().map_err(|_| bad("frequency is not an integer"))?;
            *self.model.entry(fold_key(word)).or_insert(0) += freq;
        }
        Ok(())
    }

    /// Number of lookup keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the preferred replacement for `word`, if any.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        let candidates = self.table.get(&fold_key(word))?;
        let mut best: Option<(&str, u64)> = None;
        for c in candidates {
            let freq = self.model.get(&fold_key(c)).copied().unwrap_or(0);
            if best.map_or(true, |(_, f)| freq > f) {
                best = Some((c.as_str(), freq));
            }
        }
        best.map(|(c, _)| c)
    }
}

impl Normalizer for LookupNormalizer {
    fn normalize<'a>(&self, sentence: &'a str) -> Cow<'a, str> {
        let mut out = String::with_capacity(sentence.len());
        for word in sentence.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            if let Some(replacement) = self.lookup(word) {
                out.push_str(replacement);
                continue;
            }
            // Tokens cover the chunk, so rejoining them rebuilds it.
            Tokenizer::new().tokenize(word, |token| {
                let text = match token.kind {
                    TokenKind::Word => self.lookup(token.text).unwrap_or(token.text),
                    _ => token.text,
                };
                out.push_str(text);
            });
        }
        Cow::Owned(out)
    }
}

/// Yields `(line_number, trimmed_line)` for non-blank, non-comment lines.
fn resource_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

/// Lowercases with Turkish casing for `I` and `İ`.
fn fold_key(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}
