//! inspire_me — prints a cult line from Kaamelott in a Unicode frame and offers
//! to save it. The line comes from the remote API when it answers in time with
//! a valid payload, and from a curated local list otherwise.
//!
//! Usage example (CLI):
//! ```bash
//! inspire_me --timeout 3 --output citation.txt
//! RUST_LOG=debug inspire_me --offline
//! ```
//!
//! Acquisition lives in `inspire_common`; this binary only wires the display,
//! the confirmation prompt and the file write around it.
#![warn(missing_docs)]
mod args;
mod frame;
mod prompt;
mod storage;

use crate::args::Args;
use clap::Parser;
use inspire_common::{HttpFetcher, InspireError, PayloadSource, QuoteAcquirer, Result};
use log::{error, warn};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

/// Exit status used when the user interrupts the program.
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> Result<(), InspireError> {
    init_logger();
    let args = Args::parse();

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n\nInterruption. À bientôt !");
        process::exit(EXIT_INTERRUPTED);
    }) {
        warn!("Failed to install the Ctrl+C handler: {}", e);
    }

    let fetcher = HttpFetcher::new(args.url.as_str(), Duration::from_secs(args.timeout));
    let acquirer = QuoteAcquirer::new(fetcher).offline(args.offline);
    // An unreadable working directory surfaces later as a save failure.
    let base = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Stdout is not locked for the whole run: the Ctrl+C handler prints too.
    let mut out = io::stdout();
    let outcome = run(&acquirer, &args, &mut io::stdin().lock(), &mut out, &base);
    conclude(outcome, &mut out)
}

/// Obtains, displays and optionally saves one quote.
///
/// Saving is relative to `base`; its outcome is reported on `out` and never
/// turns into an error.
fn run<S, R, W>(
    acquirer: &QuoteAcquirer<S>,
    args: &Args,
    input: &mut R,
    out: &mut W,
    base: &Path,
) -> Result<(), InspireError>
where
    S: PayloadSource,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let citation = acquirer.obtain(&mut rand::rng(), out);
    frame::display(&citation, out)?;

    let confirmed = args.yes || prompt::confirm(input, out)?;
    if !confirmed {
        writeln!(out, "Sauvegarde annulée.")?;
        return Ok(());
    }

    if persist(&citation, &args.output, base, out) {
        writeln!(out, "✓ Citation sauvegardée dans '{}'", args.output.display())?;
    } else {
        writeln!(out, "✗ La sauvegarde a échoué.")?;
    }
    Ok(())
}

/// Turns an empty quote into a printed error; other errors are returned.
fn conclude<W: Write + ?Sized>(
    outcome: Result<(), InspireError>,
    out: &mut W,
) -> Result<(), InspireError> {
    match outcome {
        Ok(()) => Ok(()),
        Err(e @ InspireError::EmptyQuote) => {
            writeln!(out, "Erreur : {}", e)?;
            Ok(())
        }
        Err(e) => {
            error!("inspire_me failed: {}", e);
            Err(e)
        }
    }
}

/// Saves the quote under `base`, reporting any failure on `out`.
fn persist<W: Write + ?Sized>(citation: &str, file: &Path, base: &Path, out: &mut W) -> bool {
    match storage::save(citation, file, base) {
        Ok(_) => true,
        Err(e) => {
            if let Err(write_err) = writeln!(out, "Erreur lors de la sauvegarde : {}", e) {
                warn!("Failed to report save error {}: {}", e, write_err);
            }
            false
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::QUESTION;
    use inspire_common::RemotePayload;
    use inspire_common::acquisition::MSG_HORS_LIGNE;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    const CITATION: &str = "Seule citation. — Anonyme";

    struct Unreachable;

    impl PayloadSource for Unreachable {
        fn fetch(&self) -> Option<RemotePayload> {
            None
        }
    }

    fn acquirer() -> QuoteAcquirer<Unreachable> {
        QuoteAcquirer::new(Unreachable).with_citations(&[CITATION])
    }

    fn session(args: &[&str], typed: &[u8], base: &Path) -> (Result<(), InspireError>, String) {
        let args = Args::parse_from(std::iter::once("inspire_me").chain(args.iter().copied()));
        let mut out = Vec::new();
        let outcome = run(&acquirer(), &args, &mut Cursor::new(typed), &mut out, base);
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn declined_save_writes_nothing() {
        let dir = tempdir().unwrap();
        let (outcome, printed) = session(&[], b"n\n", dir.path());

        assert!(outcome.is_ok());
        assert!(printed.contains(MSG_HORS_LIGNE));
        assert!(printed.contains("║  Seule citation. — Anonyme  ║"));
        assert!(printed.contains(QUESTION));
        assert!(printed.ends_with("Sauvegarde annulée.\n"));
        assert!(!dir.path().join("citation.txt").exists());
    }

    #[test]
    fn non_utf8_answer_is_a_decline() {
        let dir = tempdir().unwrap();
        let (outcome, printed) = session(&[], b"\xff\xfe\n", dir.path());

        assert!(outcome.is_ok());
        assert!(printed.ends_with("Sauvegarde annulée.\n"));
    }

    #[test]
    fn accepted_save_writes_the_quote() {
        let dir = tempdir().unwrap();
        let (outcome, printed) = session(&[], b"oui\n", dir.path());

        assert!(outcome.is_ok());
        assert!(printed.ends_with("✓ Citation sauvegardée dans 'citation.txt'\n"));
        let saved = fs::read_to_string(dir.path().join("citation.txt")).unwrap();
        assert_eq!(saved, format!("{CITATION}\n"));
    }

    #[test]
    fn yes_flag_saves_without_asking() {
        let dir = tempdir().unwrap();
        let (outcome, printed) = session(&["--yes", "--output", "q.txt"], b"", dir.path());

        assert!(outcome.is_ok());
        assert!(!printed.contains(QUESTION));
        assert!(printed.ends_with("✓ Citation sauvegardée dans 'q.txt'\n"));
        assert!(dir.path().join("q.txt").exists());
    }

    #[test]
    fn escaping_destination_is_reported_as_failure() {
        let dir = tempdir().unwrap();
        let (outcome, printed) = session(&["--output", "../../etc/passwd"], b"o\n", dir.path());

        assert!(outcome.is_ok());
        assert!(printed.contains("║  Seule citation. — Anonyme  ║"));
        assert!(printed.contains("Erreur lors de la sauvegarde : Chemin non autorisé"));
        assert!(printed.ends_with("✗ La sauvegarde a échoué.\n"));
    }

    #[test]
    fn empty_quote_is_printed_as_an_error_and_ends_cleanly() {
        let dir = tempdir().unwrap();
        let args = Args::parse_from(["inspire_me"]);
        let blank = QuoteAcquirer::new(Unreachable).with_citations(&[" \t\n "]);
        let mut out = Vec::new();

        let outcome = run(&blank, &args, &mut Cursor::new(&b"o\n"[..]), &mut out, dir.path());
        assert!(matches!(outcome, Err(InspireError::EmptyQuote)));
        assert!(conclude(outcome, &mut out).is_ok());

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.ends_with("Erreur : La citation ne peut pas être vide.\n"));
        assert!(!printed.contains(QUESTION));
    }

    #[test]
    fn other_errors_are_returned() {
        let mut out = Vec::new();
        let outcome = Err(InspireError::Io(io::ErrorKind::BrokenPipe.into()));
        assert!(matches!(conclude(outcome, &mut out), Err(InspireError::Io(_))));
        assert!(out.is_empty());
    }
}
