//! Filter Group Component
//!
//! One checkbox group for a multi-select filter dimension. The "Any" box is
//! checked exactly when the dimension is unrestricted.

use leptos::prelude::*;

use catalog_core::{Choice, Selection};

/// Checkbox group over `options`
///
/// Props:
/// - title: group heading
/// - options: (value, label) pairs in display order
/// - selection: current selection for this dimension
/// - on_toggle: called with the toggled choice
#[component]
pub fn FilterGroup<T>(
    title: &'static str,
    options: Vec<(T, String)>,
    #[prop(into)] selection: Signal<Selection<T>>,
    #[prop(into)] on_toggle: Callback<Choice<T>>,
) -> impl IntoView
where
    T: Ord + Clone + Send + Sync + 'static,
{
    let is_any = move || selection.with(Selection::is_any);

    view! {
        <fieldset class="filter-group">
            <legend>{title}</legend>
            <label class="filter-option any">
                <input
                    type="checkbox"
                    prop:checked=is_any
                    on:change=move |ev| {
                        on_toggle.run(Choice::Any);
                        // Unchecking "Any" is a reset too, so the box stays checked
                        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(true);
                    }
                />
                "Any"
            </label>
            {options.into_iter().map(|(value, label)| {
                let checked_value = value.clone();
                let is_checked = move || selection.with(|s| s.contains(&checked_value));
                view! {
                    <label class="filter-option">
                        <input
                            type="checkbox"
                            prop:checked=is_checked
                            on:change=move |_| on_toggle.run(Choice::Value(value.clone()))
                        />
                        {label}
                    </label>
                }
            }).collect_view()}
        </fieldset>
    }
}
