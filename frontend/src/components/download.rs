//! Download link for the returned workbook.

use leptos::*;
use sheet_relay::Session;

use crate::{webhook_config, SelectedFile};

#[component]
pub fn DownloadLink(session: RwSignal<Session<SelectedFile>>) -> impl IntoView {
    let filename = webhook_config().download_filename;
    let href = move || session.with(|s| s.download_href().map(str::to_string));

    view! {
        <Show
            when=move || href().is_some()
            fallback=|| view! { }
        >
            <a href=move || href().unwrap_or_default() download=filename.clone() id="downloadLink">
                <button class="btn btn-secondary">"Download Updated Excel"</button>
            </a>
        </Show>
    }
}
