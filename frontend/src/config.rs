//! Application configuration.
//!
//! Endpoint and page constants live in the core crate; this module adds
//! what only matters in the browser.

use std::time::Duration;

use sheet_relay::WebhookConfig;

pub use sheet_relay::config::{ACCEPTED_EXTENSIONS, APP_TITLE, DOWNLOAD_FILENAME, WEBHOOK_URL};

/// Console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// How long to wait for the webhook.
///
/// `None` waits as long as the webhook takes. Automation flows calling
/// out to phone agents can run for minutes.
pub const REQUEST_TIMEOUT: Option<Duration> = None;

/// Config used for every run.
pub fn webhook_config() -> WebhookConfig {
    let config = WebhookConfig::default();
    match REQUEST_TIMEOUT {
        Some(timeout) => config.with_timeout(timeout),
        None => config,
    }
}
