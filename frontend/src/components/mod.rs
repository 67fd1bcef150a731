//! UI Components for the Sheet Relay application.
//!
//! # Layout Components
//! - [`Hero`] - Page heading
//!
//! # Feature Components
//! - [`UploadSection`] - File picker, Run Model button and status line
//! - [`DownloadLink`] - Download of the returned workbook
//! - [`PreviewSection`] - Table preview of the returned first sheet

mod hero;
mod upload;
mod download;
mod preview;

pub use hero::*;
pub use upload::*;
pub use download::*;
pub use preview::*;
