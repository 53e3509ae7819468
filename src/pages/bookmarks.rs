//! Bookmarked articles with search and removal.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::search_bar::SearchBar;
use crate::components::toaster::push_toast;
use crate::data::records::Bookmark;
use crate::data::seed;
use crate::listing::relative_time::time_ago;
use crate::listing::search::{ListStatus, filter_by_term, list_status, remove_by_id};
use crate::state::toast::ToastState;
use crate::util::clock;

#[component]
pub fn BookmarksPage() -> impl IntoView {
    let items = RwSignal::new(seed::bookmarks());
    let term = RwSignal::new(String::new());
    let now = clock::now();

    let visible = Memo::new(move |_| items.with(|all| filter_by_term(all, &term.get())));
    let status = move || list_status(items.with(Vec::len), visible.with(Vec::len));

    view! {
        <main class="page page--list">
            <div class="page__header">
                <h1 class="page__title">"Bookmarks"</h1>
                <span class="page__count">{move || format!("{} saved", items.with(Vec::len))}</span>
            </div>
            <SearchBar term=term placeholder="Search bookmarks by title, author or tag..."/>
            {move || match status() {
                ListStatus::Populated => view! {
                    <div class="card-grid">
                        <For each=move || visible.get() key=|b| b.id let:bookmark>
                            <BookmarkCard bookmark=bookmark now=now items=items/>
                        </For>
                    </div>
                }
                .into_any(),
                other => view! {
                    <EmptyState status=other empty_title="No bookmarks yet" empty_message="Bookmark articles to read them later."/>
                }
                .into_any(),
            }}
        </main>
    }
}

#[component]
fn BookmarkCard(bookmark: Bookmark, now: time::OffsetDateTime, items: RwSignal<Vec<Bookmark>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = bookmark.id;
    let on_remove = move |_| {
        items.update(|all| remove_by_id(all, id, |b| b.id));
        push_toast(toasts, "Bookmark removed", "");
    };

    view! {
        <div class="card">
            <img class="card__image" src=bookmark.thumbnail alt=bookmark.title.clone()/>
            <div class="card__body">
                <a class="card__title" href=bookmark.url>{bookmark.title}</a>
                <p class="card__excerpt">{bookmark.excerpt}</p>
                <div class="card__tags">
                    {bookmark.tags.into_iter().map(|t| view! { <span class="tag tag--small">{t}</span> }).collect_view()}
                </div>
                <div class="card__meta">
                    <span>{bookmark.author}</span>
                    <span>{time_ago(&bookmark.bookmarked_at, now, Some("Bookmarked"))}</span>
                    <span>{format!("{} min read", bookmark.read_time)}</span>
                </div>
                <button class="btn btn--ghost" on:click=on_remove>"Remove"</button>
            </div>
        </div>
    }
}
