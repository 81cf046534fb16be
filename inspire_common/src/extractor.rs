//! Validation of the remote payload and extraction of the quote.
//!
//! The Kaamelott API answers with:
//!
//! ```json
//! {
//!   "status": 1,
//!   "citation": {
//!     "citation": "Le texte...",
//!     "infos": { "personnage": "Perceval" }
//!   }
//! }
//! ```
//!
//! The field names of that schema are private to this module; a change of
//! provider only touches the types below.
//!
//! Typing is strict: a `null` or missing `infos`/`personnage` means "no
//! speaker", but a speaker or `infos` of another JSON type (`0`, `false`, a
//! list) rejects the whole payload instead of dropping the attribution. The
//! first version of the tool, written in a dynamic language, treated such
//! falsy values as "no speaker"; the stricter rule is intended.
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::fetcher::RemotePayload;

/// Separator placed between the quote and its speaker.
pub const ATTRIBUTION_SEPARATOR: &str = " — ";

/// Value of `status` for a successful answer.
const STATUS_OK: f64 = 1.0;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: Option<Value>,
    citation: Option<CitationBlock>,
}

#[derive(Debug, Deserialize)]
struct CitationBlock {
    citation: Option<String>,
    infos: Option<Infos>,
}

#[derive(Debug, Deserialize)]
struct Infos {
    personnage: Option<String>,
}

/// Extracts `"{text} — {speaker}"` (or `text` alone) from a payload.
///
/// Returns `None` when the status is not the success value, when the text is
/// missing or blank, or when any field has an unexpected JSON type.
pub fn extract(payload: &RemotePayload) -> Option<String> {
    let response = match ApiResponse::deserialize(&payload.0) {
        Ok(response) => response,
        Err(e) => {
            debug!("Unexpected payload shape: {}", e);
            return None;
        }
    };

    if response.status.as_ref().and_then(Value::as_f64) != Some(STATUS_OK) {
        debug!("Payload rejected, status: {:?}", response.status);
        return None;
    }

    let block = response.citation?;
    let text = block.citation.as_deref().unwrap_or_default().trim();
    if text.is_empty() {
        debug!("Payload rejected, empty quote text");
        return None;
    }

    let speaker = block
        .infos
        .and_then(|infos| infos.personnage)
        .unwrap_or_default();
    let speaker = speaker.trim();

    if speaker.is_empty() {
        Some(text.to_string())
    } else {
        Some(format!("{text}{ATTRIBUTION_SEPARATOR}{speaker}"))
    }
}
