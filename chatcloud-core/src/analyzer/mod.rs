//! Text analysis pipeline.
//!
//! This module turns one raw chat line into the units that get counted:
//! - **Preprocessor**: Drops the timestamp/sender prefix and substitutes sentinels
//! - **Normalizer**: Rewrites informal text into its standard form
//! - **Tokenizer**: Splits the sentence into typed tokens
//! - **Segmenter**: Separates emoji from the text around them
//! - **Collapse**: Reduces stretched trailing characters (`"yesss"` -> `"yes"`)

pub mod collapse;
pub mod normalizer;
pub mod preprocessor;
pub mod segmenter;
pub mod tokenizer;

pub use collapse::collapse_trailing_repeats;
pub use normalizer::{IdentityNormalizer, LookupNormalizer, Normalizer};
pub use preprocessor::{Preprocessor, Sentinels};
pub use segmenter::{EmojiSet, Segmenter};
pub use tokenizer::{Token, Tokenizer};

use smallvec::SmallVec;

/// Units extracted from a single line. Most chat lines fit inline.
pub type LineUnits = SmallVec<[String; 16]>;

/// Runs the full per-line analysis.
///
/// Generic over the normalizer so tests can inject [`IdentityNormalizer`].
pub struct Analyzer<N> {
    preprocessor: Preprocessor,
    normalizer: N,
    tokenizer: Tokenizer,
    segmenter: Segmenter,
}

impl<N: Normalizer> Analyzer<N> {
    /// Builds an analyzer around a compiled segmenter.
    pub fn new(normalizer: N, sentinels: Sentinels, segmenter: Segmenter) -> Self {
        Self {
            preprocessor: Preprocessor::new(sentinels),
            normalizer,
            tokenizer: Tokenizer::new(),
            segmenter,
        }
    }

    /// Emits every unit of `line`, in order.
    ///
    /// Units are trimmed and collapsed; empty units are emitted too.
    pub fn analyze_with<F>(&self, line: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        let sentence = self.preprocessor.preprocess(line);
        let normalized = self.normalizer.normalize(sentence);

        self.tokenizer.tokenize(&normalized, |token| {
            if !token.kind.is_counted() {
                return;
            }
            self.segmenter.segment(token.text, |segment| {
                emit(collapse_trailing_repeats(segment).trim());
            });
        });
    }

    /// Collects the units of `line`.
    pub fn analyze(&self, line: &str) -> LineUnits {
        let mut units = LineUnits::new();
        self.analyze_with(line, |unit| units.push(unit.to_owned()));
        units
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn segmenter() -> Segmenter {
        Segmenter::new(&EmojiSet::default()).expect("default class compiles")
    }

    fn analyzer() -> Analyzer<IdentityNormalizer> {
        Analyzer::new(IdentityNormalizer, Sentinels::default(), segmenter())
    }

    #[test]
    fn prefix_stripped_and_words_split() {
        assert_eq!(analyzer().analyze("A: hi there").as_slice(), ["hi", "there"]);
    }

    #[test]
    fn punctuation_dropped() {
        assert_eq!(
            analyzer().analyze("B: naber, iyi misin?").as_slice(),
            ["naber", "iyi", "misin"]
        );
    }

    #[test]
    fn stretched_words_collapsed() {
        assert_eq!(
            analyzer().analyze("A: yesss nooo").as_slice(),
            ["yes", "no"]
        );
    }

    #[test]
    fn emoji_separated_and_collapsed() {
        assert_eq!(
            analyzer().analyze("A: güzel\u{1F60D}\u{1F60D}").as_slice(),
            ["güzel", "\u{1F60D}", "\u{1F60D}"]
        );
    }

    #[test]
    fn media_sentinel_is_a_unit() {
        assert_eq!(
            analyzer().analyze("A: <Medya dahil edilmedi>").as_slice(),
            ["\u{1F4F7}"]
        );
    }

    #[test]
    fn link_sentinel_is_a_unit() {
        assert_eq!(
            analyzer().analyze("A: https://example.com").as_slice(),
            ["\u{1F517}"]
        );
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert!(analyzer().analyze("A: ").is_empty());
    }

    #[test]
    fn normalizer_runs_before_tokenizing() {
        struct Upper;
        impl Normalizer for Upper {
            fn normalize<'a>(&self, s: &'a str) -> Cow<'a, str> {
                Cow::Owned(s.to_uppercase())
            }
        }

        let a = Analyzer::new(Upper, Sentinels::default(), segmenter());
        assert_eq!(a.analyze("A: hi, you").as_slice(), ["HI", "YOU"]);
    }

    #[test]
    fn lookup_normalizer_plugs_in() {
        let mut n = LookupNormalizer::new();
        n.load_lookup(std::path::Path::new("t.txt"), "nbr=naber")
            .expect("valid lookup");
        let a = Analyzer::new(n, Sentinels::default(), segmenter());
        assert_eq!(a.analyze("A: nbr").as_slice(), ["naber"]);
    }

    #[test]
    fn analyze_with_matches_analyze() {
        let a = analyzer();
        let line = "A: selam \u{1F602} selam!!";
        let mut streamed = Vec::new();
        a.analyze_with(line, |u| streamed.push(u.to_string()));
        assert_eq!(streamed.as_slice(), a.analyze(line).as_slice());
    }
}
