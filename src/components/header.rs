//! Page Header

use leptos::prelude::*;

use crate::components::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">"Crafting Catalog"</h1>
            <ThemeToggle />
        </header>
    }
}
