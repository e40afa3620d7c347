//! Streaming Tokenizer Module
//!
//! Splits a normalized sentence into typed tokens. It's the second stage of
//! the analyzer, sitting between the normalizer and the emoji segmenter.
//!
//! ## What It Does
//!
//! Given `"Ali'nin kedisi 3.5 kilo!! 😂"`, it emits:
//!
//! ```ignore
//! ("Ali'nin", TokenKind::Word)
//! ("kedisi", TokenKind::Word)
//! ("3.5", TokenKind::Number)
//! ("kilo", TokenKind::Word)
//! ("!", TokenKind::Punctuation)
//! ("!", TokenKind::Punctuation)
//! ("😂", TokenKind::Symbol)
//! ```
//!
//! ## Rules
//!
//! - Whitespace separates chunks.
//! - A chunk starting with `http://`, `https://` or `www.` is a single URL.
//! - Punctuation characters become single-character tokens, except an
//!   apostrophe between two alphanumerics (`Ali'nin`) and a `.` or `,`
//!   between two digits (`3.5`, `1,000`).
//! - Remaining pieces are words if they contain a letter, numbers if they are
//!   all digits, and symbols otherwise.
//!
//! ## Zero Allocation
//!
//! Tokens are slices of the input handed to a callback.

use chatcloud_types::TokenKind;

const URL_PREFIXES: [&str; 3] = ["http://", "https://", "www."];

/// A typed slice of the tokenized sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Streaming tokenizer for normalized chat sentences.
///
/// ## Example
///
/// ```
/// use chatcloud_core::analyzer::tokenizer::Tokenizer;
/// use chatcloud_types::TokenKind;
///
/// let mut words = 0;
/// Tokenizer::new().tokenize("hello, world", |token| {
///     if token.kind == TokenKind::Word {
///         words += 1;
///     }
/// });
///
/// assert_eq!(words, 2);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits each token in order.
    pub fn tokenize<'a, F>(&self, text: &'a str, mut emit: F)
    where
        F: FnMut(Token<'a>),
    {
        for chunk in text.split_whitespace() {
            if URL_PREFIXES.iter().any(|p| chunk.starts_with(p)) {
                emit(Token {
                    text: chunk,
                    kind: TokenKind::Url,
                });
                continue;
            }
            split_chunk(chunk, &mut emit);
        }
    }
}

fn split_chunk<'a, F>(chunk: &'a str, emit: &mut F)
where
    F: FnMut(Token<'a>),
{
    let mut start = 0usize;
    let mut prev: Option<char> = None;
    let mut iter = chunk.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        let next = iter.peek().map(|&(_, n)| n);

        if is_punctuation(c) && !is_inner_joiner(prev, c, next) {
            if start < i {
                emit(piece(&chunk[start..i]));
            }
            let end = i + c.len_utf8();
            emit(Token {
                text: &chunk[i..end],
                kind: TokenKind::Punctuation,
            });
            start = end;
        }

        prev = Some(c);
    }

    if start < chunk.len() {
        emit(piece(&chunk[start..]));
    }
}

/// Classifies a punctuation-free piece.
fn piece(text: &str) -> Token<'_> {
    let kind = if text.chars().any(char::is_alphabetic) {
        TokenKind::Word
    } else if text.chars().any(|c| c.is_numeric())
        && text
            .chars()
            .all(|c| c.is_numeric() || c == '.' || c == ',')
    {
        TokenKind::Number
    } else {
        TokenKind::Symbol
    };
    Token { text, kind }
}

#[inline]
fn is_inner_joiner(prev: Option<char>, c: char, next: Option<char>) -> bool {
    let (Some(p), Some(n)) = (prev, next) else {
        return false;
    };
    match c {
        '\'' | '\u{2019}' => p.is_alphanumeric() && n.is_alphanumeric(),
        '.' | ',' => p.is_numeric() && n.is_numeric(),
        _ => false,
    }
}

#[inline]
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2018}'..='\u{201F}'
                | '\u{2010}'..='\u{2015}'
                | '\u{2026}'
                | '\u{00AB}'
                | '\u{00BB}'
                | '\u{00BF}'
                | '\u{00A1}'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, TokenKind)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |t| out.push((t.text, t.kind)));
        out
    }

    fn texts(input: &str) -> Vec<&str> {
        collect(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn token_size_is_small() {
        assert!(std::mem::size_of::<Token<'_>>() <= 3 * std::mem::size_of::<usize>());
    }

    #[test]
    fn words_split_on_whitespace() {
        assert_eq!(texts("hi  there\tfriend"), ["hi", "there", "friend"]);
        assert!(collect("hi there")
            .iter()
            .all(|(_, k)| *k == TokenKind::Word));
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("   ").is_empty());
    }

    #[test]
    fn punctuation_separated() {
        assert_eq!(
            collect("naber?!"),
            [
                ("naber", TokenKind::Word),
                ("?", TokenKind::Punctuation),
                ("!", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn leading_and_inner_punctuation() {
        assert_eq!(texts("\"evet\""), ["\"", "evet", "\""]);
        assert_eq!(texts("a,b"), ["a", ",", "b"]);
    }

    #[test]
    fn apostrophe_inside_word_kept() {
        assert_eq!(collect("Ali'nin"), [("Ali'nin", TokenKind::Word)]);
        assert_eq!(texts("Ayşe\u{2019}ye"), ["Ayşe\u{2019}ye"]);
    }

    #[test]
    fn trailing_apostrophe_split() {
        assert_eq!(texts("kids'"), ["kids", "'"]);
    }

    #[test]
    fn numbers_keep_inner_separators() {
        assert_eq!(collect("3.14"), [("3.14", TokenKind::Number)]);
        assert_eq!(collect("1,000"), [("1,000", TokenKind::Number)]);
        assert_eq!(texts("5."), ["5", "."]);
    }

    #[test]
    fn urls_are_single_tokens() {
        assert_eq!(
            collect("bak https://x.com/a?b=1, tamam"),
            [
                ("bak", TokenKind::Word),
                ("https://x.com/a?b=1,", TokenKind::Url),
                ("tamam", TokenKind::Word),
            ]
        );
        assert_eq!(collect("www.site.org")[0].1, TokenKind::Url);
    }

    #[test]
    fn emoji_are_symbols() {
        assert_eq!(collect("\u{1F602}"), [("\u{1F602}", TokenKind::Symbol)]);
        assert_eq!(
            collect("\u{2665}\u{FE0F}"),
            [("\u{2665}\u{FE0F}", TokenKind::Symbol)]
        );
    }

    #[test]
    fn emoji_glued_to_word_stays_one_token() {
        assert_eq!(
            collect("güzel\u{1F60D}"),
            [("güzel\u{1F60D}", TokenKind::Word)]
        );
    }

    #[test]
    fn unicode_punctuation() {
        assert_eq!(texts("\u{201C}ok\u{201D}\u{2026}"), ["\u{201C}", "ok", "\u{201D}", "\u{2026}"]);
        assert_eq!(texts("a\u{2014}b"), ["a", "\u{2014}", "b"]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello, world 😂");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |t| {
            let ptr = t.text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();

        let mut n = 0usize;
        t.tokenize("hello world", |_| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("one two three", |_| n += 1);
        assert_eq!(n, 3);
    }
}
