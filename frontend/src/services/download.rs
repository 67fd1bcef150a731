//! Object URLs for the download link.
//!
//! Each URL pins its blob in memory until revoked, so every href handed
//! back by the session goes through [`revoke_object_url`].

use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::types::{AppError, AppResult};

/// Wrap `bytes` in a blob and return an object URL pointing at it.
pub fn create_object_url(bytes: &[u8], mime: &str) -> AppResult<String> {
    let parts = Array::of1(&Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| AppError::Download(format!("Failed to create blob: {:?}", e)))?;

    Url::create_object_url_with_blob(&blob)
        .map_err(|e| AppError::Download(format!("Failed to create object URL: {:?}", e)))
}

/// Release an object URL created by [`create_object_url`].
pub fn revoke_object_url(href: &str) {
    match Url::revoke_object_url(href) {
        Ok(()) => log::debug!("Revoked download URL {}", href),
        Err(e) => log::warn!("Could not revoke {}: {}", href, AppError::from(e)),
    }
}
