//! # Sheet Relay - spreadsheet round trip through an automation webhook
//!
//! Posts a spreadsheet to a remote webhook, receives the updated workbook
//! and turns its first sheet into a preview table. This crate holds the
//! platform-independent part; the Leptos frontend wires it to the browser.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Selection  │────▶│  Submitter  │────▶│   Parser    │────▶│   Preview   │
//! │  (Session)  │     │ (Transport) │     │ (1st sheet) │     │   + blob    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Webhook endpoint and page constants
//! - [`error`] - Error types
//! - [`models`] - Cells, preview table, result blob, status
//! - [`parser`] - Workbook decoding with a delimited-text fallback
//! - [`session`] - Selection / run state machine
//! - [`submit`] - Transport seam and run orchestration

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod session;
pub mod submit;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{
    WebhookConfig,
    ACCEPTED_EXTENSIONS,
    APP_TITLE,
    DOWNLOAD_FILENAME,
    FILE_FIELD,
    WEBHOOK_URL,
    XLSX_MIME,
};

pub use error::{
    DecodeError,
    DecodeResult,
    RunError,
    RunResult,
    SubmitError,
    SubmitResult,
};

pub use models::{
    CellValue,
    FileHandle,
    PreviewTable,
    ResultBlob,
    RunOutput,
    RunStatus,
    FAILURE_MESSAGE,
};

pub use parser::decode_workbook;

pub use session::{Completion, CompletedRun, RunStart, RunTicket, Session};

pub use submit::{run_model, HttpReply, Transport};
