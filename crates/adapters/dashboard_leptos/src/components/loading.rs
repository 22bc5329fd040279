//! Loading indicator.

use leptos::prelude::*;

/// Placeholder shown while a request is in flight.
#[component]
pub fn Loading(
    /// Text shown to the user.
    #[prop(default = "Loading\u{2026}".into(), into)]
    message: String,
) -> impl IntoView {
    view! {
        <p class="loading">{message}</p>
    }
}
