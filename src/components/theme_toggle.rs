//! Theme Toggle Button
//!
//! Shows a moon in light mode and a sun in dark mode.

use leptos::prelude::*;

use crate::theme::{use_theme, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_ctx = use_theme();

    let is_light = move || theme_ctx.theme.get() == Theme::Light;

    view! {
        <button
            class="theme-toggle"
            title=move || if is_light() { "Switch to dark theme" } else { "Switch to light theme" }
            on:click=move |_| theme_ctx.toggle()
        >
            <span class=move || if is_light() { "moon" } else { "sun" }>
                {move || if is_light() { "🌙" } else { "☀" }}
            </span>
        </button>
    }
}
