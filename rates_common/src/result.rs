//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `RatesError`, so functions can simply return `Result<T>`.
use crate::error::RatesError;

/// Workspace-wide `Result` alias with `RatesError` as the default error.
pub type Result<T, E = RatesError> = std::result::Result<T, E>;
