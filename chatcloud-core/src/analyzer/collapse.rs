//! Trailing repeated-character collapse.
//!
//! Chat writers stretch words by holding a key: `"yesss"`, `"nooo"`,
//! `"😂😂😂"`. Only the run of the *last* character is reduced; repeats
//! elsewhere in the unit are left alone.

/// Reduces the trailing run of the last character to a single instance.
///
/// Scans right to left while a character equals its predecessor. The
/// result is always a prefix of `input`, so no allocation is needed.
///
/// ```
/// use chatcloud_core::analyzer::collapse::collapse_trailing_repeats;
///
/// assert_eq!(collapse_trailing_repeats("yesss"), "yes");
/// assert_eq!(collapse_trailing_repeats("aabb"), "aab");
/// assert_eq!(collapse_trailing_repeats("loool"), "loool");
/// ```
#[inline]
pub fn collapse_trailing_repeats(input: &str) -> &str {
    let mut rev = input.char_indices().rev();
    let Some((last_idx, last)) = rev.next() else {
        return input;
    };

    let mut run_start = last_idx;
    for (i, c) in rev {
        if c != last {
            break;
        }
        run_start = i;
    }

    &input[..run_start + last.len_utf8()]
}
