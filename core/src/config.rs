//! Application configuration.
//!
//! Everything is fixed at compile time. The webhook URL can be swapped
//! for a staging hook by setting `SHEET_RELAY_WEBHOOK_URL` when building.

use std::time::Duration;

/// Automation webhook that receives the spreadsheet and answers with
/// the updated workbook.
pub const WEBHOOK_URL: &str = match option_env!("SHEET_RELAY_WEBHOOK_URL") {
    Some(url) => url,
    None => "https://muarata.app.n8n.cloud/webhook/6f75aa48-58c3-4785-b1e0-311a7c94be0d",
};

/// Multipart field name carrying the file.
pub const FILE_FIELD: &str = "file";

/// Default filename offered for the downloaded result.
pub const DOWNLOAD_FILENAME: &str = "UpdatedFile.xlsx";

/// File picker filter. Advisory only, the browser lets users pick anything.
pub const ACCEPTED_EXTENSIONS: &str = ".xlsx,.xls";

/// Mime type used for the download blob when the webhook sends none.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Page heading.
pub const APP_TITLE: &str = "Credit Auto-Calling Agent";

/// Where and how a run is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Endpoint receiving the POST.
    pub url: String,
    /// Multipart field name for the file part.
    pub field_name: String,
    /// Filename of the download link.
    pub download_filename: String,
    /// Give up waiting after this long. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: WEBHOOK_URL.to_string(),
            field_name: FILE_FIELD.to_string(),
            download_filename: DOWNLOAD_FILENAME.to_string(),
            timeout: None,
        }
    }
}

impl WebhookConfig {
    /// Point the config at another endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Abort waiting for the webhook after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
