//! Chat line preprocessing.
//!
//! Exported chat logs prefix every message with a timestamp and sender:
//!
//! ```text
//! 12.03.2021 21:14 - Ayşe: selam
//! ```
//!
//! The preprocessor drops everything up to the first `": "` and replaces
//! media and link placeholders with fixed sentinel emoji so they are counted
//! as single units.

use memchr::memmem;

/// Separator between the metadata prefix and the message body.
const PREFIX_SEPARATOR: &[u8] = b": ";

/// Placeholder strings and their sentinel replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinels {
    /// Body written by the exporter when media was not included.
    pub media_placeholder: String,
    /// Replacement for the media placeholder.
    pub media: String,
    /// Replacement for bodies that start with a link.
    pub link: String,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            media_placeholder: "<Medya dahil edilmedi>".to_string(),
            media: "\u{1F4F7}".to_string(),
            link: "\u{1F517}".to_string(),
        }
    }
}

/// Strips chat metadata and substitutes sentinels.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    sentinels: Sentinels,
}

impl Preprocessor {
    pub fn new(sentinels: Sentinels) -> Self {
        Self { sentinels }
    }

    /// Returns the message body of `line` with placeholders replaced.
    ///
    /// The media check runs first; the link check then sees its result.
    pub fn preprocess<'a>(&'a self, line: &'a str) -> &'a str {
        let mut body = message_body(line);

        if body == self.sentinels.media_placeholder {
            body = self.sentinels.media.as_str();
        }

        if body.starts_with("http") || body.starts_with("www") {
            body = self.sentinels.link.as_str();
        }

        body
    }
}

/// Returns the text after the first `": "`, or the whole line if absent.
#[inline]
pub fn message_body(line: &str) -> &str {
    match memmem::find(line.as_bytes(), PREFIX_SEPARATOR) {
        // `": "` is ASCII, so `i + 2` is a char boundary.
        Some(i) => &line[i + PREFIX_SEPARATOR.len()..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre(line: &str) -> String {
        Preprocessor::default().preprocess(line).to_string()
    }

    #[test]
    fn strips_prefix() {
        assert_eq!(pre("12.03.2021 21:14 - Ayşe: selam naber"), "selam naber");
    }

    #[test]
    fn splits_on_first_separator_only() {
        assert_eq!(pre("A: note: buy milk"), "note: buy milk");
    }

    #[test]
    fn bare_line_is_body() {
        assert_eq!(pre("no prefix here"), "no prefix here");
        assert_eq!(pre("time 21:14"), "time 21:14");
    }

    #[test]
    fn empty_body_after_prefix() {
        assert_eq!(pre("A: "), "");
    }

    #[test]
    fn media_placeholder_replaced() {
        assert_eq!(pre("A: <Medya dahil edilmedi>"), "\u{1F4F7}");
        assert_eq!(pre("<Medya dahil edilmedi>"), "\u{1F4F7}");
    }

    #[test]
    fn media_placeholder_must_match_exactly() {
        assert_eq!(
            pre("A: <Medya dahil edilmedi> lol"),
            "<Medya dahil edilmedi> lol"
        );
    }

    #[test]
    fn links_replaced() {
        assert_eq!(pre("A: https://example.com/x"), "\u{1F517}");
        assert_eq!(pre("A: www.example.com"), "\u{1F517}");
        assert_eq!(pre("A: httpx is a word"), "\u{1F517}");
    }

    #[test]
    fn link_later_in_body_is_kept() {
        assert_eq!(
            pre("A: look at https://example.com"),
            "look at https://example.com"
        );
    }

    #[test]
    fn custom_sentinels() {
        let p = Preprocessor::new(Sentinels {
            media_placeholder: "<Media omitted>".to_string(),
            media: "[media]".to_string(),
            link: "[link]".to_string(),
        });
        assert_eq!(p.preprocess("Bob: <Media omitted>"), "[media]");
        assert_eq!(p.preprocess("Bob: www.x.org"), "[link]");
    }

    #[test]
    fn media_sentinel_starting_with_www_becomes_link() {
        let p = Preprocessor::new(Sentinels {
            media_placeholder: "<m>".to_string(),
            media: "www-media".to_string(),
            link: "L".to_string(),
        });
        assert_eq!(p.preprocess("A: <m>"), "L");
    }

    #[test]
    fn borrows_from_input() {
        let p = Preprocessor::default();
        let line = String::from("A: hello");
        let body = p.preprocess(&line);
        let base = line.as_ptr() as usize;
        let ptr = body.as_ptr() as usize;
        assert!(ptr >= base && ptr < base + line.len());
    }
}
