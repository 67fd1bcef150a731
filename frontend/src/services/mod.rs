//! Browser services.
//!
//! # Services
//!
//! - [`upload`] - Multipart POST to the webhook via `fetch`
//! - [`download`] - Object URLs for the returned workbook

pub mod upload;
pub mod download;

pub use upload::*;
pub use download::*;
