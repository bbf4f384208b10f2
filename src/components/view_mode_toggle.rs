//! View Mode Switch
//!
//! Grid/list selector buttons.

use leptos::prelude::*;

use crate::models::VIEW_MODES;
use crate::store::{use_browser_store, BrowserStateStoreFields};

#[component]
pub fn ViewModeToggle() -> impl IntoView {
    let store = use_browser_store();

    view! {
        <div class="view-mode-toggle">
            {VIEW_MODES.iter().map(|(mode, label)| {
                let mode = *mode;
                let is_selected = move || store.view_mode().get() == mode;
                view! {
                    <button
                        class=move || if is_selected() { "view-mode-btn active" } else { "view-mode-btn" }
                        on:click=move |_| store.view_mode().set(mode)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
