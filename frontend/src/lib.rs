//! Sheet Relay - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for sending a spreadsheet to the automation webhook,
//! downloading the workbook it returns and previewing its first sheet.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the Session signal)                       │
//! │  ├── Hero (title)                                            │
//! │  ├── UploadSection (picker, Run Model, status, download)     │
//! │  └── PreviewSection (when the result has data rows)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Browser file wrapper and frontend errors
//! - [`components`] - UI components
//! - [`services`] - Webhook transport and download URLs

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use sheet_relay::Session;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, SelectedFile};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // One session per page load
    let session = create_rw_signal(Session::<SelectedFile>::new());

    view! {
        <div class="container">
            <Hero/>
            <UploadSection session=session/>
            <PreviewSection session=session/>
        </div>
    }
}
