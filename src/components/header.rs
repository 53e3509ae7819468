//! Site header: brand, navigation, search, and the auth or user controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the persisted session once on mount, then reacts to the shared
//! `RwSignal<SessionState>`. Hosts the auth modal so every page can open it.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::auth_modal::{AuthModal, AuthModalHandle};
use super::notification_dropdown::NotificationDropdown;
use super::user_profile_dropdown::UserProfileDropdown;
use crate::state::auth::AuthView;
use crate::state::session::SessionState;
use crate::util::storage::BrowserStorage;

/// Path for the all-blogs page filtered by `term`.
pub fn search_href(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        "/blogs".to_owned()
    } else {
        let encoded: String = term
            .bytes()
            .map(|b| match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => char::from(b).to_string(),
                b' ' => "+".to_owned(),
                other => format!("%{other:02X}"),
            })
            .collect();
        format!("/blogs?q={encoded}")
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let modal = expect_context::<AuthModalHandle>();
    let navigate = use_navigate();
    let search = RwSignal::new(String::new());

    session.set(SessionState::load(&BrowserStorage));

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let href = search_href(&search.get_untracked());
        log::debug!("search -> {href}");
        navigate(&href, NavigateOptions::default());
    };

    view! {
        <header class="header">
            <div class="header__inner">
                <A href="/" attr:class="header__brand">
                    <span class="header__logo">"TB"</span>
                    <span class="header__title">"TechBlog"</span>
                </A>
                <nav class="header__nav">
                    <A href="/" attr:class="header__link">"Home"</A>
                    <A href="/blogs" attr:class="header__link">"Blogs"</A>
                    <Show when=move || session.with(|s| s.logged_in)>
                        <A href="/new-blog" attr:class="header__link">"Write"</A>
                    </Show>
                </nav>
                <form class="header__search" on:submit=on_search>
                    <input
                        class="header__search-input"
                        type="search"
                        placeholder="Search blogs..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </form>
                <div class="header__actions">
                    <Show
                        when=move || session.with(|s| s.logged_in)
                        fallback=move || {
                            view! {
                                <button class="btn btn--ghost" on:click=move |_| modal.open_at(AuthView::Login)>
                                    "Sign In"
                                </button>
                                <button class="btn btn--primary" on:click=move |_| modal.open_at(AuthView::Signup)>
                                    "Sign Up"
                                </button>
                            }
                        }
                    >
                        <NotificationDropdown/>
                        <UserProfileDropdown/>
                    </Show>
                </div>
            </div>
            <AuthModal/>
        </header>
    }
}
