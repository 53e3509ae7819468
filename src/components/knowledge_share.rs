//! Call-to-action band inviting readers to write.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::auth_modal::AuthModalHandle;
use crate::state::auth::AuthView;
use crate::state::session::SessionState;

#[component]
pub fn KnowledgeShare() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let modal = expect_context::<AuthModalHandle>();
    let navigate = use_navigate();

    // Signed-out visitors are sent through signup first.
    let on_start = move |_| {
        if session.with_untracked(|s| s.logged_in) {
            navigate("/new-blog", NavigateOptions::default());
        } else {
            modal.open_at(AuthView::Signup);
        }
    };

    view! {
        <section class="cta">
            <h2 class="cta__title">"Share Your Knowledge"</h2>
            <p class="cta__text">
                "Write about what you build, teach what you learn, and grow with other developers."
            </p>
            <button class="btn btn--light" on:click=on_start>"Start Writing"</button>
        </section>
    }
}
