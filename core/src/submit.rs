//! Webhook submission.
//!
//! [`run_model`] posts the selected file through a [`Transport`], checks the
//! reply and decodes it into a preview. The transport is the only part that
//! touches the network; the browser build plugs in a fetch-based one.

use crate::config::WebhookConfig;
use crate::error::{RunResult, SubmitError, SubmitResult};
use crate::models::{FileHandle, ResultBlob, RunOutput};
use crate::parser::decode_workbook;

/// Raw reply of the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one multipart POST carrying a single file.
///
/// Implementations put the file under `config.field_name` with its own
/// filename, POST it to `config.url` once and return the full reply.
/// Runs on a single-threaded event loop, so the future is not `Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type File: FileHandle;

    async fn post_file(&self, config: &WebhookConfig, file: &Self::File) -> SubmitResult<HttpReply>;
}

/// Submit `file` and decode the returned workbook.
///
/// Any non-2xx status is an error. A 2xx body is always treated as a
/// workbook, whatever its content type says.
pub async fn run_model<T: Transport>(
    transport: &T,
    config: &WebhookConfig,
    file: &T::File,
) -> RunResult<RunOutput> {
    log::info!("📤 Posting {} to {}", file.file_name(), config.url);

    let reply = transport.post_file(config, file).await?;
    log::info!(
        "Webhook replied {} ({} bytes, {})",
        reply.status,
        reply.body.len(),
        reply.content_type.as_deref().unwrap_or("no content type")
    );

    if !reply.ok() {
        return Err(SubmitError::Status {
            status: reply.status,
        }
        .into());
    }

    let table = decode_workbook(&reply.body)?;

    Ok(RunOutput {
        blob: ResultBlob::new(reply.body, reply.content_type),
        table,
    })
}
