//! Saved-for-later articles with search and removal.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::empty_state::EmptyState;
use crate::components::search_bar::SearchBar;
use crate::components::toaster::push_toast;
use crate::data::records::SavedBlog;
use crate::data::seed;
use crate::listing::relative_time::time_ago;
use crate::listing::search::{ListStatus, filter_by_term, list_status, remove_by_id};
use crate::state::toast::ToastState;
use crate::util::clock;

#[component]
pub fn SavedBlogsPage() -> impl IntoView {
    let items = RwSignal::new(seed::saved_blogs());
    let term = RwSignal::new(String::new());
    let now = clock::now();

    let visible = Memo::new(move |_| items.with(|all| filter_by_term(all, &term.get())));
    let status = move || list_status(items.with(Vec::len), visible.with(Vec::len));

    view! {
        <main class="page page--list">
            <div class="page__header">
                <h1 class="page__title">"Saved Blogs"</h1>
                <span class="page__count">{move || format!("{} saved", items.with(Vec::len))}</span>
            </div>
            <SearchBar term=term placeholder="Search saved blogs..."/>
            {move || match status() {
                ListStatus::Populated => view! {
                    <div class="list">
                        <For each=move || visible.get() key=|s| s.id let:saved>
                            <SavedRow saved=saved now=now items=items/>
                        </For>
                    </div>
                }
                .into_any(),
                other => view! {
                    <EmptyState status=other empty_title="No saved blogs" empty_message="Save articles to find them here."/>
                }
                .into_any(),
            }}
        </main>
    }
}

#[component]
fn SavedRow(saved: SavedBlog, now: time::OffsetDateTime, items: RwSignal<Vec<SavedBlog>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = saved.id;
    let on_remove = move |_| {
        items.update(|all| remove_by_id(all, id, |s| s.id));
        push_toast(toasts, "Removed from saved", "");
    };

    view! {
        <div class="list-row">
            <img class="list-row__thumb" src=saved.thumbnail alt=saved.title.clone()/>
            <div class="list-row__body">
                <span class="tag tag--small">{saved.category}</span>
                <A href=format!("/blog/{id}") attr:class="list-row__title">{saved.title}</A>
                <p class="list-row__excerpt">{saved.excerpt}</p>
                <div class="list-row__meta">
                    <span>{saved.author}</span>
                    <span>{time_ago(&saved.saved_at, now, Some("Saved"))}</span>
                    <span>{format!("{} min read", saved.read_time)}</span>
                </div>
            </div>
            <button class="list-row__remove" title="Remove" on:click=on_remove>"✕"</button>
        </div>
    }
}
