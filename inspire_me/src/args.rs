//! Command-line arguments for inspire_me.
//!
//! This module defines the CLI interface using `clap`. Every flag has a
//! default, so running the binary without arguments behaves like the classic
//! interactive tool.
use std::path::PathBuf;

use clap::Parser;
use inspire_common::net::{API_TIMEOUT_SECS, API_URL};

/// Default file the quote is saved to.
pub const FICHIER_SORTIE: &str = "citation.txt";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    version,
    about = "Affiche une réplique culte, avec repli local hors-ligne",
    long_about = None
)]
pub struct Args {
    /// Endpoint of the remote quote source.
    #[clap(long, default_value = API_URL)]
    pub url: String,

    /// Maximum time, in seconds, allowed for the remote request.
    #[clap(long, default_value_t = API_TIMEOUT_SECS)]
    pub timeout: u64,

    /// File the quote is written to when saving.
    /// Must stay inside the current directory.
    #[clap(long, default_value = FICHIER_SORTIE)]
    pub output: PathBuf,

    /// Skip the remote source and pick a local quote directly.
    #[clap(long)]
    pub offline: bool,

    /// Save without asking for confirmation.
    #[clap(long)]
    pub yes: bool,
}
