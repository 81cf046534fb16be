//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `InspireError`, so functions can simply return
//! `Result<T>`.
use crate::error::InspireError;

/// Workspace-wide `Result` alias with `InspireError` as the default error.
pub type Result<T, E = InspireError> = std::result::Result<T, E>;
