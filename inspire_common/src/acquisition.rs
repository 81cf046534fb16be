//! Remote-then-local quote acquisition.
//!
//! `QuoteAcquirer::obtain` is the entry point of the core. It tries the remote
//! source once, validates what came back, falls back to the curated list and
//! then to the default quote, and sanitizes whatever was chosen. It never
//! fails: every layer below it reports absence instead of errors.
//!
//! Flow:
//! - progress notice, then one fetch attempt (skipped in offline mode);
//! - extraction of the payload, returned sanitized on success;
//! - otherwise offline notice, random local quote, or `CITATION_DEFAUT` if the
//!   list is empty, returned sanitized.
use std::io::Write;

use log::{debug, warn};
use rand::Rng;

use crate::error::InspireError;
use crate::extractor::extract;
use crate::fallback::{self, CITATION_DEFAUT, CITATIONS};
use crate::fetcher::PayloadSource;
use crate::sanitize::sanitize;

/// Printed before contacting the remote source.
pub const MSG_CHARGEMENT: &str = "🔍 Recherche d'une réplique culte...";
/// Printed when the quote comes from the local list.
pub const MSG_HORS_LIGNE: &str = "📚 Mode hors-ligne — réplique locale";

/// Quote acquisition pipeline over a payload source.
pub struct QuoteAcquirer<S> {
    source: S,
    citations: &'static [&'static str],
    offline: bool,
}

impl<S: PayloadSource> QuoteAcquirer<S> {
    /// Pipeline using `source` and the built-in fallback quotes.
    pub fn new(source: S) -> Self {
        QuoteAcquirer {
            source,
            citations: CITATIONS,
            offline: false,
        }
    }

    /// Replaces the fallback list.
    pub fn with_citations(mut self, citations: &'static [&'static str]) -> Self {
        self.citations = citations;
        self
    }

    /// When set, the remote source is never contacted.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Returns a sanitized quote, from the remote source when possible.
    ///
    /// User-facing notices are written to `notices`; a failure to write them
    /// is logged and otherwise ignored.
    pub fn obtain<R, W>(&self, rng: &mut R, notices: &mut W) -> String
    where
        R: Rng + ?Sized,
        W: Write + ?Sized,
    {
        notify(notices, MSG_CHARGEMENT);

        if let Some(quote) = self.remote() {
            debug!("Quote obtained from the remote source");
            return sanitize(&quote);
        }

        notify(notices, MSG_HORS_LIGNE);

        let quote = match fallback::select(self.citations, rng) {
            Ok(quote) => quote,
            Err(InspireError::EmptySource) => {
                warn!("Fallback list is empty, using the default quote");
                CITATION_DEFAUT.to_string()
            }
            Err(e) => {
                warn!("Local selection failed: {}", e);
                CITATION_DEFAUT.to_string()
            }
        };
        sanitize(&quote)
    }

    fn remote(&self) -> Option<String> {
        if self.offline {
            debug!("Offline mode, remote source skipped");
            return None;
        }
        let payload = self.source.fetch()?;
        extract(&payload)
    }
}

fn notify<W: Write + ?Sized>(out: &mut W, message: &str) {
    if let Err(e) = writeln!(out, "{}", message) {
        debug!("Failed to print notice: {}", e);
    }
}
