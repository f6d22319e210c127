//! Bounded-length display names for log lines and record labels.
//!
//! Only used for human-readable output; identifiers are always compared
//! in full.

/// Default maximum display width
pub const DEFAULT_NAME_WIDTH: usize = 20;

/// Marker appended to a truncated name
pub const ELLIPSIS: &str = "...";

/// Shorten `name` for display.
///
/// - Names shorter than `max_len` characters are returned unchanged.
/// - Multi-word names are shortened to their first word (which is itself
///   shortened if still too long).
/// - A single long word keeps its first `max_len - 3` characters followed
///   by `"..."`.
///
/// The bound is strict: a single word of exactly `max_len` characters is
/// truncated too (`shorten("abcdefghij", 10)` gives `"abcdefg..."`).
///
/// Lengths are counted in `char`s so multi-byte names are never split
/// inside a code point.
///
/// ```
/// use blastgroup::utils::shorten::shorten;
///
/// assert_eq!(shorten("short", 20), "short");
/// assert_eq!(shorten("two tokens", 5), "two");
/// assert_eq!(shorten("a_very_long_single_token_name", 10), "a_very_...");
/// ```
pub fn shorten(name: &str, max_len: usize) -> String {
    if name.chars().count() < max_len {
        return name.to_string();
    }

    let mut words = name.split_whitespace();
    let first = match words.next() {
        Some(w) => w,
        None => return truncate(name, max_len),
    };
    if words.next().is_some() {
        return shorten(first, max_len);
    }

    truncate(first, max_len)
}

/// [`shorten`] with [`DEFAULT_NAME_WIDTH`]
pub fn shorten_default(name: &str) -> String {
    shorten(name, DEFAULT_NAME_WIDTH)
}

fn truncate(word: &str, max_len: usize) -> String {
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut out: String = word.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
