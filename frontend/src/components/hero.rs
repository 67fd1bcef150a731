//! Hero section component

use leptos::*;

use crate::APP_TITLE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h2>{APP_TITLE}</h2>
        </div>
    }
}
