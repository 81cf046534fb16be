//!
//! Quote acquisition core shared with the `inspire_me` client.
//!
//! This crate aggregates:
//! - `error` — unified error type `InspireError` used across the workspace.
//! - `result` — handy `Result<T, InspireError>` alias.
//! - `net` — remote endpoint, timeout and user agent constants.
//! - `fetcher` — single-shot HTTP GET returning an optional JSON payload.
//! - `extractor` — validation of the payload and quote extraction.
//! - `fallback` — curated local quotes and random selection.
//! - `sanitize` — whitespace normalization applied before display or storage.
//! - `acquisition` — the remote-then-local pipeline, the public entry point.
//! - `answer` — yes/no tokens accepted by the save prompt.
#![warn(missing_docs)]
pub mod acquisition;
pub mod answer;
pub mod error;
pub mod extractor;
pub mod fallback;
pub mod fetcher;
pub mod net;
pub mod result;
pub mod sanitize;

pub use acquisition::QuoteAcquirer;
pub use error::InspireError;
pub use fetcher::{HttpFetcher, PayloadSource, RemotePayload};
pub use result::Result;
pub use sanitize::sanitize;
