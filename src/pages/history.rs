//! Reading history with search, per-entry removal, and clear-all.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::empty_state::EmptyState;
use crate::components::search_bar::SearchBar;
use crate::components::toaster::push_toast;
use crate::data::records::HistoryItem;
use crate::data::seed;
use crate::listing::relative_time::time_ago;
use crate::listing::search::{ListStatus, filter_by_term, list_status, remove_by_id};
use crate::state::toast::ToastState;
use crate::util::clock;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let items = RwSignal::new(seed::history());
    let term = RwSignal::new(String::new());
    let now = clock::now();

    let visible = Memo::new(move |_| items.with(|all| filter_by_term(all, &term.get())));
    let status = move || list_status(items.with(Vec::len), visible.with(Vec::len));

    let on_clear = move |_| {
        items.update(Vec::clear);
        push_toast(toasts, "History cleared", "Your reading history has been removed.");
    };

    view! {
        <main class="page page--list">
            <div class="page__header">
                <h1 class="page__title">"Reading History"</h1>
                <Show when=move || items.with(|i| !i.is_empty())>
                    <button class="btn btn--ghost" on:click=on_clear>"Clear all"</button>
                </Show>
            </div>
            <SearchBar term=term placeholder="Search history..."/>
            {move || match status() {
                ListStatus::Populated => view! {
                    <div class="list">
                        <For each=move || visible.get() key=|h| h.id let:item>
                            <HistoryRow item=item now=now items=items/>
                        </For>
                    </div>
                }
                .into_any(),
                other => view! {
                    <EmptyState status=other empty_title="No reading history" empty_message="Articles you read will show up here."/>
                }
                .into_any(),
            }}
        </main>
    }
}

#[component]
fn HistoryRow(item: HistoryItem, now: time::OffsetDateTime, items: RwSignal<Vec<HistoryItem>>) -> impl IntoView {
    let id = item.id;
    view! {
        <div class="list-row">
            <img class="list-row__thumb" src=item.thumbnail alt=item.title.clone()/>
            <div class="list-row__body">
                <A href=format!("/blog/{id}") attr:class="list-row__title">{item.title}</A>
                <p class="list-row__excerpt">{item.excerpt}</p>
                <div class="list-row__meta">
                    <span>{item.author}</span>
                    <span>{time_ago(&item.read_at, now, None)}</span>
                    <span>{format!("{} min read", item.read_time)}</span>
                    <span>{format!("♥ {}", item.likes)}</span>
                </div>
            </div>
            <button
                class="list-row__remove"
                title="Remove from history"
                on:click=move |_| items.update(|all| remove_by_id(all, id, |h| h.id))
            >
                "✕"
            </button>
        </div>
    }
}
