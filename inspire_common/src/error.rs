//! Error types shared by the acquisition core and the client binary.
//!
//! The `InspireError` enum unifies the few failure cases that are allowed to
//! leave a component: I/O while saving, an empty fallback source, an empty
//! quote handed to the display, and a destination path outside the allowed
//! directory. Network and payload problems never appear here; they are
//! absorbed by the fetcher and the extractor.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type shared by the core and the client.
#[derive(Error, Debug)]
pub enum InspireError {
    /// I/O error originating from the standard library (files, terminal).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The fallback list holds no quote to choose from.
    #[error("Aucune citation disponible.")]
    EmptySource,

    /// The quote is empty once sanitized, nothing can be displayed.
    #[error("La citation ne peut pas être vide.")]
    EmptyQuote,

    /// The destination resolves outside of the allowed base directory.
    #[error("Chemin non autorisé : le fichier doit rester dans {}", .base.display())]
    PathEscape {
        /// Path as requested by the caller.
        path: PathBuf,
        /// Directory the path had to stay in.
        base: PathBuf,
    },
}
