//! Domain models for a Sheet Relay session.
//!
//! - [`CellValue`] - A single decoded cell (text, number, boolean or empty)
//! - [`PreviewTable`] - Header row plus data rows of the first sheet
//! - [`ResultBlob`] - Raw bytes returned by the webhook
//! - [`RunOutput`] - What a successful run produces
//! - [`RunStatus`] - The UI status and its message
//! - [`FileHandle`] - What the session needs to know about a selected file

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::XLSX_MIME;

/// Status line shown after a file is picked.
pub const FILE_SELECTED_MESSAGE: &str = "File selected. Click 'Run Model' to start.";

/// Status line while the webhook call is in flight.
pub const RUNNING_MESSAGE: &str = "Running model...";

/// Status line once the preview is available.
pub const SUCCESS_MESSAGE: &str = "Model run successful. Displaying updated data...";

/// Single status line for every failure.
pub const FAILURE_MESSAGE: &str = "Failed to run model or parse file.";

// =============================================================================
// Selected File
// =============================================================================

/// A file picked by the user.
///
/// The session never reads the payload itself; it only hands the handle
/// to a [`crate::submit::Transport`].
pub trait FileHandle {
    /// Name of the file as shown by the picker.
    fn file_name(&self) -> String;
}

// =============================================================================
// Cells
// =============================================================================

/// A decoded cell value.
///
/// Serializes untagged so a row reads like a JSON row:
/// `["Alice", 100.0, true, null]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(number) => write!(f, "{}", number),
            CellValue::Boolean(flag) => write!(f, "{}", flag),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

// =============================================================================
// Preview Table
// =============================================================================

/// Row-major view of the first sheet.
///
/// Rows are not required to have as many cells as there are headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl PreviewTable {
    /// Split raw rows into a header row and data rows.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let mut rows = rows.into_iter();
        let headers = rows
            .next()
            .map(|header| header.iter().map(ToString::to_string).collect())
            .unwrap_or_default();

        Self {
            headers,
            rows: rows.collect(),
        }
    }

    /// The table is only worth rendering when it has data rows.
    pub fn has_data_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Widest row, header row included.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}

// =============================================================================
// Result Blob
// =============================================================================

/// Bytes returned by the webhook, kept verbatim for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBlob {
    bytes: Vec<u8>,
    content_type: Option<String>,
}

impl ResultBlob {
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self { bytes, content_type }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Content type for the download blob, falling back to xlsx.
    pub fn mime_type(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|mime| !mime.trim().is_empty())
            .unwrap_or(XLSX_MIME)
    }
}

/// Output of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub blob: ResultBlob,
    pub table: PreviewTable,
}

// =============================================================================
// Status
// =============================================================================

/// UI status of the session.
///
/// `Idle` is both the initial state and the only state without a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunStatus {
    #[default]
    Idle,
    FileSelected,
    Running,
    Succeeded,
    Failed,
}

impl RunStatus {
    /// Human readable status line. Empty while idle.
    pub fn message(&self) -> &'static str {
        match self {
            RunStatus::Idle => "",
            RunStatus::FileSelected => FILE_SELECTED_MESSAGE,
            RunStatus::Running => RUNNING_MESSAGE,
            RunStatus::Succeeded => SUCCESS_MESSAGE,
            RunStatus::Failed => FAILURE_MESSAGE,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }
}
