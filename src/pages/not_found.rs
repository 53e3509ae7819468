//! Catch-all 404 page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    log::warn!("404: no route for {path}");

    view! {
        <main class="page page--not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Oops! Page not found"</p>
            <A href="/" attr:class="btn btn--primary">"Return to Home"</A>
        </main>
    }
}
