//! Preview table of the returned workbook's first sheet.

use leptos::*;
use sheet_relay::{CellValue, PreviewTable, Session};

use crate::SelectedFile;

#[component]
pub fn PreviewSection(session: RwSignal<Session<SelectedFile>>) -> impl IntoView {
    let table = create_memo(move |_| session.with(|s| s.preview().cloned()));
    let has_rows = move || table.with(|t| t.as_ref().is_some_and(PreviewTable::has_data_rows));

    view! {
        <Show
            when=has_rows
            fallback=|| view! { }
        >
            <div class="preview-section show" id="previewSection">
                <h3 class="preview-title">"📊 Updated File Preview"</h3>
                {move || table.get().map(render_table)}
            </div>
        </Show>
    }
}

fn render_table(table: PreviewTable) -> View {
    let PreviewTable { headers, rows } = table;

    view! {
        <table class="preview-table" border="1" cellpadding="8" style="border-collapse: collapse;">
            <thead>
                <tr>
                    {headers
                        .into_iter()
                        .map(|header| view! { <th>{header}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                {row
                                    .into_iter()
                                    .map(|cell| view! { <td class=cell_class(&cell)>{cell.to_string()}</td> })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

/// CSS class per cell kind; numbers are right-aligned by the stylesheet.
fn cell_class(cell: &CellValue) -> &'static str {
    match cell {
        CellValue::Text(_) => "cell-text",
        CellValue::Number(_) => "cell-number",
        CellValue::Boolean(_) => "cell-boolean",
        CellValue::Empty => "cell-empty",
    }
}
