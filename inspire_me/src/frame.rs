//! Framed terminal rendering of a quote.
//!
//! The box is drawn with double-line box characters and sized on the number
//! of characters of the quote, with two spaces of padding on each side.
use std::io::Write;

use inspire_common::{InspireError, Result, sanitize};

/// Horizontal padding on each side of the quote.
const PADDING: usize = 2;

/// Builds the framed block for `citation`, surrounded by blank lines.
///
/// The quote is sanitized again; an empty result is an error.
pub fn render(citation: &str) -> Result<String> {
    let citation = sanitize(citation);
    if citation.is_empty() {
        return Err(InspireError::EmptyQuote);
    }

    let inner = citation.chars().count() + 2 * PADDING;
    let pad = " ".repeat(PADDING);
    let lines = [
        String::new(),
        format!("╔{}╗", "═".repeat(inner)),
        format!("║{}║", " ".repeat(inner)),
        format!("║{pad}{citation}{pad}║"),
        format!("║{}║", " ".repeat(inner)),
        format!("╚{}╝", "═".repeat(inner)),
        String::new(),
    ];
    Ok(lines.join("\n"))
}

/// Writes the framed quote to `out`.
pub fn display<W: Write + ?Sized>(citation: &str, out: &mut W) -> Result<()> {
    writeln!(out, "{}", render(citation)?)?;
    Ok(())
}
