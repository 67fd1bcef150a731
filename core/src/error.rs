//! Error types for the Sheet Relay run pipeline.
//!
//! - [`SubmitError`] - Webhook submission errors
//! - [`DecodeError`] - Workbook decoding errors
//! - [`RunError`] - Top-level run errors (what the session sees)
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. The session shows one
//! status line for every [`RunError`]; the variants only exist for the
//! diagnostic log.

use std::time::Duration;

use thiserror::Error;

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors while posting the file to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The multipart body or the request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// The request never got a response (DNS, CORS, connection reset...).
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The webhook answered with a non-success status.
    #[error("Server error ({status})")]
    Status { status: u16 },

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// No response within the configured timeout.
    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
}

// =============================================================================
// Decoding Errors
// =============================================================================

/// Errors while turning the returned bytes into a preview table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The webhook returned an empty body.
    #[error("Response body is empty")]
    EmptyBody,

    /// The workbook opened but contains no sheet.
    #[error("Workbook has no sheets")]
    NoSheets,

    /// The bytes are not a workbook format we can read.
    #[error("Unreadable workbook: {0}")]
    Workbook(String),

    /// The first sheet could not be read.
    #[error("Failed to read sheet '{name}': {message}")]
    Sheet { name: String, message: String },

    /// Delimited-text fallback failed.
    #[error("Invalid delimited text: {0}")]
    Text(String),
}

// =============================================================================
// Run Errors (top-level)
// =============================================================================

/// Top-level run errors.
///
/// This is the error type returned by [`crate::submit::run_model`] and
/// handed to [`crate::session::Session::finish_run`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Submission failed.
    #[error("Submit error: {0}")]
    Submit(#[from] SubmitError),

    /// Response could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for a whole run.
pub type RunResult<T> = Result<T, RunError>;
