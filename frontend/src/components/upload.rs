//! Spreadsheet upload component.
//!
//! Handles file selection, the Run Model action and the status line.

use leptos::*;
use sheet_relay::{run_model, Completion, RunTicket, Session};
use web_sys::{Event, HtmlInputElement};

use crate::services::{create_object_url, revoke_object_url, FetchTransport};
use crate::{webhook_config, DownloadLink, SelectedFile, ACCEPTED_EXTENSIONS};

#[component]
pub fn UploadSection(session: RwSignal<Session<SelectedFile>>) -> impl IntoView {
    // Handler pour le changement de fichier
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input
            .files()
            .and_then(|files| files.get(0))
            .map(SelectedFile::from);

        if let Some(stale) = session.try_update(|s| s.select(file)).flatten() {
            revoke_object_url(&stale);
        }
    };

    let on_run = move |_| {
        let Some(start) = session.try_update(|s| s.begin_run()).flatten() else {
            return;
        };
        if let Some(stale) = start.revoked.as_deref() {
            revoke_object_url(stale);
        }

        spawn_local(async move {
            let config = webhook_config();
            let transport = FetchTransport::new(config.timeout);

            let outcome = run_model(&transport, &config, &start.file).await;

            let applied = session.try_update(|s| s.finish_run(start.ticket, outcome));
            if applied == Some(Completion::Applied) {
                publish_download(session, start.ticket);
            }
        });
    };

    let status = move || session.with(|s| s.status_message());

    view! {
        <div class="upload-section" id="uploadZone">
            <input
                type="file"
                id="fileInput"
                accept=ACCEPTED_EXTENSIONS
                on:change=on_file_change
            />
            <br/><br/>

            <button
                class="btn btn-primary"
                id="runModelBtn"
                on:click=on_run
                disabled=move || !session.with(|s| s.can_run())
            >
                "Run Model"
            </button>
            <br/><br/>

            <Show
                when=move || !status().is_empty()
                fallback=|| view! { }
            >
                <p class="status">"Status: " {status}</p>
            </Show>

            <DownloadLink session=session/>
        </div>
    }
}

/// Create the download URL for the current result and hand it to the session.
fn publish_download(session: RwSignal<Session<SelectedFile>>, ticket: RunTicket) {
    let created = session.with_untracked(|s| {
        s.result()
            .map(|result| create_object_url(result.blob.bytes(), result.blob.mime_type()))
    });

    match created {
        Some(Ok(href)) => {
            if let Some(unused) = session.try_update(|s| s.attach_download(ticket, href)).flatten() {
                revoke_object_url(&unused);
            }
        }
        Some(Err(e)) => {
            if let Some(unused) = session.try_update(|s| s.fail_run(ticket, e)).flatten() {
                revoke_object_url(&unused);
            }
        }
        None => {}
    }
}
