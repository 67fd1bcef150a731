//! Common types used across the frontend application.
//!
//! - **Selection Types** - Browser file handle wrapper
//! - **Error Types** - Frontend error handling

use std::fmt;

use sheet_relay::FileHandle;
use wasm_bindgen::JsValue;
use web_sys::File;

// =============================================================================
// Selection Types
// =============================================================================

/// File picked in the browser, as stored in the session.
#[derive(Clone, Debug)]
pub struct SelectedFile(File);

impl SelectedFile {
    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl From<File> for SelectedFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl FileHandle for SelectedFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Covers browser API failures outside the run pipeline itself.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Object URL for the download could not be created.
    Download(String),
    /// Any other browser API call failed.
    Browser(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Download(msg) => write!(f, "Download error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
