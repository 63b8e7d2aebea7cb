//! Ordinal prefixes on content names
//!
//! Content authors express ordering intent by prefixing names with digits and a
//! separator: `01.intro.md`, `10-setup`, `3_appendix`. The ordinal is the numeric
//! value of that prefix; names without one have ordinal 0.

use crate::types::{Ordinal, MARKDOWN_EXTENSION};
use unicode_normalization::UnicodeNormalization;

const SEPARATORS: [char; 3] = ['.', '-', '_'];

/// Split a name into its digit prefix and the remainder after the separator.
fn split_prefix(name: &str) -> Option<(&str, &str)> {
    let digits_end = name
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)?;
    if digits_end == 0 {
        return None;
    }
    let rest = &name[digits_end..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(sep) if SEPARATORS.contains(&sep) => Some((&name[..digits_end], chars.as_str())),
        _ => None,
    }
}

/// Extract the ordinal from a file or directory name.
///
/// Returns 0 when the name has no digit prefix, when the digits are not followed
/// by a separator, or when the digits do not fit in an [`Ordinal`].
pub fn extract_ordinal(name: &str) -> Ordinal {
    split_prefix(name)
        .and_then(|(digits, _)| digits.parse::<Ordinal>().ok())
        .unwrap_or(0)
}

/// Human-readable name: ordinal prefix and markdown extension removed, NFC normalized.
pub fn display_name(name: &str) -> String {
    let stem = name
        .strip_suffix(MARKDOWN_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(name);
    let stripped = match split_prefix(stem) {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => stem,
    };
    stripped.nfc().collect()
}
