//! Emoji segmentation.
//!
//! Chat tokens often glue emoji to words (`"güzel😍"`) or stack them
//! (`"😂😂😂"`). The segmenter splits a token into:
//!
//! - the heart sequence `♥️` (U+2665 U+FE0F),
//! - single emoji-class characters, and
//! - maximal runs of everything else.
//!
//! A variation selector (U+FE0F) after an emoji is ordinary text by default,
//! so `"😀\u{FE0F}a"` splits into `😀` and `\u{FE0F}a`.
//! [`Segmenter::with_variation_selector`] keeps it attached to the emoji
//! instead.
//!
//! Alternatives are tried leftmost-first in that order, so a run of ordinary
//! characters swallows a heart that directly follows it (`"a♥️"` is one
//! segment), exactly as the alternation reads.
//!
//! The emoji class is configurable: the narrow Unicode Emoticons block keeps
//! parity with older exports, while [`EmojiSet::Pictographic`] covers every
//! `Extended_Pictographic` code point.

use regex::Regex;

use crate::error::Result;

const EMOTICONS_CLASS: &str = r"\x{1F600}-\x{1F64F}";
const PICTOGRAPHIC_CLASS: &str = r"\p{Extended_Pictographic}";
const HEART: &str = r"\x{2665}\x{FE0F}";
const VARIATION_SELECTOR: &str = r"\x{FE0F}";

/// Which characters count as emoji for segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmojiSet {
    /// The Emoticons block, U+1F600..=U+1F64F.
    #[default]
    Emoticons,
    /// Every `Extended_Pictographic` code point.
    Pictographic,
    /// A regex character-class body, e.g. `\x{1F300}-\x{1FAFF}`.
    Custom(String),
}

impl EmojiSet {
    /// Character-class body without the surrounding brackets.
    pub fn class_body(&self) -> &str {
        match self {
            EmojiSet::Emoticons => EMOTICONS_CLASS,
            EmojiSet::Pictographic => PICTOGRAPHIC_CLASS,
            EmojiSet::Custom(body) => body.as_str(),
        }
    }

    fn pattern(&self, keep_variation_selector: bool) -> String {
        let class = self.class_body();
        let mut p = String::with_capacity(64 + 2 * class.len());
        p.push_str(HEART);
        p.push_str("|[");
        p.push_str(class);
        p.push(']');
        if keep_variation_selector {
            p.push_str(VARIATION_SELECTOR);
            p.push('?');
        }
        p.push_str("|[^");
        p.push_str(class);
        p.push_str("]+");
        p
    }
}

/// Splits token text into emoji and non-emoji segments.
#[derive(Debug, Clone)]
pub struct Segmenter {
    regex: Regex,
}

impl Segmenter {
    /// Compiles the segmentation regex for `set`.
    ///
    /// # Errors
    ///
    /// Returns `ChatCloudError::EmojiClass` if a custom class does not compile.
    pub fn new(set: &EmojiSet) -> Result<Self> {
        Self::build(set, false)
    }

    /// Like [`Segmenter::new`], but a U+FE0F directly after an emoji stays
    /// in the emoji's segment.
    ///
    /// # Errors
    ///
    /// Returns `ChatCloudError::EmojiClass` if a custom class does not compile.
    pub fn with_variation_selector(set: &EmojiSet) -> Result<Self> {
        Self::build(set, true)
    }

    fn build(set: &EmojiSet, keep_variation_selector: bool) -> Result<Self> {
        let regex = Regex::new(&set.pattern(keep_variation_selector))?;
        Ok(Self { regex })
    }

    /// Emits every segment of `text`, left to right.
    ///
    /// Segments are slices of `text`; the concatenation of all segments is
    /// `text` itself.
    #[inline]
    pub fn segment<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str),
    {
        for m in self.regex.find_iter(text) {
            emit(m.as_str());
        }
    }
}
