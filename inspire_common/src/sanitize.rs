//! Whitespace normalization for quotes.
//!
//! Line breaks and tabs would break the box drawn around a quote, so every
//! quote goes through [`sanitize`] before it is shown or written to disk.

/// Replaces `\n`, `\r` and `\t` with spaces, collapses whitespace runs into a
/// single space and trims both ends.
///
/// The function is idempotent: `sanitize(&sanitize(x)) == sanitize(x)`.
pub fn sanitize(raw: &str) -> String {
    raw.replace(['\n', '\r', '\t'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
