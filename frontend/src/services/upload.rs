//! Fetch-based transport posting the selected file to the webhook.

use std::time::Duration;

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use sheet_relay::{FileHandle, HttpReply, SubmitError, SubmitResult, Transport, WebhookConfig};
use web_sys::FormData;

use crate::types::SelectedFile;

/// [`Transport`] backed by the browser's `fetch`.
#[derive(Debug, Clone, Default)]
pub struct FetchTransport {
    timeout: Option<Duration>,
}

impl FetchTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    async fn send(&self, request: Request) -> SubmitResult<Response> {
        let response = Box::pin(request.send());

        let Some(limit) = self.timeout else {
            return response.await.map_err(network_error);
        };

        let timer = Box::pin(TimeoutFuture::new(timeout_millis(limit)));
        match select(response, timer).await {
            Either::Left((result, _)) => result.map_err(network_error),
            Either::Right(_) => Err(SubmitError::Timeout(limit)),
        }
    }
}

impl Transport for FetchTransport {
    type File = SelectedFile;

    async fn post_file(&self, config: &WebhookConfig, file: &SelectedFile) -> SubmitResult<HttpReply> {
        let form_data = FormData::new()
            .map_err(|e| SubmitError::Request(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(&config.field_name, file.as_file(), &file.file_name())
            .map_err(|e| SubmitError::Request(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&config.url)
            .body(form_data)
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        let response = self.send(request).await?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .binary()
            .await
            .map_err(|e| SubmitError::Body(e.to_string()))?;

        Ok(HttpReply {
            status,
            body,
            content_type,
        })
    }
}

fn network_error(e: gloo_net::Error) -> SubmitError {
    SubmitError::Network(e.to_string())
}

/// Timer delay in milliseconds, saturating at the browser's limit.
fn timeout_millis(limit: Duration) -> u32 {
    limit.as_millis().min(i32::MAX as u128) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_secs(90)), 90_000);
        assert_eq!(timeout_millis(Duration::from_millis(1)), 1);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), i32::MAX as u32);
    }

    #[test]
    fn test_default_has_no_timeout() {
        assert_eq!(FetchTransport::default().timeout, None);
        assert_eq!(
            FetchTransport::new(Some(Duration::from_secs(5))).timeout,
            Some(Duration::from_secs(5))
        );
    }
}
