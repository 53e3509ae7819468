//! Search input bound to a page's filter term.

use leptos::prelude::*;

#[component]
pub fn SearchBar(term: RwSignal<String>, #[prop(into)] placeholder: String) -> impl IntoView {
    view! {
        <div class="search-bar">
            <span class="search-bar__icon">"🔍"</span>
            <input
                class="search-bar__input"
                type="search"
                placeholder=placeholder
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
        </div>
    }
}
