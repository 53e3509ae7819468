//! All-blogs feed with search, category/tag filters, sorting, and paging.
//!
//! SYSTEM CONTEXT
//! ==============
//! `?q=` from the header search pre-fills the term. Scrolling near the end of
//! the page (or the "Load more" button) appends generated records after a
//! short simulated delay until the feed cap.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::blog_card::BlogCard;
use crate::components::empty_state::EmptyState;
use crate::components::search_bar::SearchBar;
use crate::config::{BLOG_FEED_CAP, BLOG_PAGE_SIZE};
use crate::data::seed::{self, CATEGORIES, FILTER_TAGS};
use crate::listing::blogs::{ALL, BlogQuery, SortOrder, ViewMode, next_page_start, toggle_like};
use crate::listing::search::{ListStatus, list_status};
use crate::util::clock;

#[component]
pub fn AllBlogsPage() -> impl IntoView {
    let query_map = use_query_map();
    let posts = RwSignal::new(seed::generate_blogs(1, BLOG_PAGE_SIZE, clock::now()));
    let liked = RwSignal::new(BTreeSet::<u32>::new());

    let term = RwSignal::new(String::new());
    let category = RwSignal::new(ALL.to_owned());
    let tag = RwSignal::new(ALL.to_owned());
    let sort = RwSignal::new(SortOrder::default());
    let mode = RwSignal::new(ViewMode::default());
    let loading = RwSignal::new(false);

    // Follow header searches, including ones made while already here.
    Effect::new(move || {
        if let Some(q) = query_map.with(|m| m.get("q")) {
            term.set(q);
        }
    });

    let visible = Memo::new(move |_| {
        let query = BlogQuery { term: term.get(), category: category.get(), tag: tag.get(), sort: sort.get() };
        posts.with(|p| query.apply(p))
    });
    let status = move || list_status(posts.with(Vec::len), visible.with(Vec::len));
    let has_more = move || posts.with(|p| next_page_start(p.len(), BLOG_PAGE_SIZE, BLOG_FEED_CAP).is_some());

    let on_like = Callback::new(move |id: u32| {
        let mut now_liked = false;
        posts.update(|p| liked.update(|l| now_liked = toggle_like(p, l, id)));
        log::debug!("post {id} liked={now_liked}");
    });

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let load_more = move || {
        if loading.get_untracked() {
            return;
        }
        let Some(start) = posts.with_untracked(|p| next_page_start(p.len(), BLOG_PAGE_SIZE, BLOG_FEED_CAP)) else {
            return;
        };
        loading.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            clock::sleep_ms(crate::config::LOAD_MORE_MS).await;
            let more = seed::generate_blogs(start, BLOG_PAGE_SIZE, clock::now());
            log::debug!("loaded {} more posts from id {start}", more.len());
            posts.update(|p| p.extend(more));
            loading.set(false);
        });
    };

    #[cfg(feature = "csr")]
    {
        use crate::config::SCROLL_LOAD_MARGIN_PX;
        use crate::listing::blogs::near_bottom;

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let at_bottom = crate::util::browser::document_scroll()
                .is_some_and(|(viewport, top, height)| near_bottom(viewport, top, height, SCROLL_LOAD_MARGIN_PX));
            if at_bottom {
                load_more();
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_reset = move |_| {
        term.set(String::new());
        category.set(ALL.to_owned());
        tag.set(ALL.to_owned());
        sort.set(SortOrder::default());
    };

    view! {
        <main class="page page--blogs">
            <div class="page__header">
                <h1 class="page__title">"All Blogs"</h1>
                <p class="page__subtitle">"Discover stories, tutorials and ideas from the community."</p>
            </div>
            <div class="filters">
                <SearchBar term=term placeholder="Search by title, excerpt or author..."/>
                <select
                    class="filters__select"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value=ALL>"All categories"</option>
                    {CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                </select>
                <select class="filters__select" prop:value=move || tag.get() on:change=move |ev| tag.set(event_target_value(&ev))>
                    <option value=ALL>"All tags"</option>
                    {FILTER_TAGS.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                </select>
                <select
                    class="filters__select"
                    prop:value=move || sort.get().value()
                    on:change=move |ev| sort.set(SortOrder::from_value(&event_target_value(&ev)))
                >
                    {SortOrder::ALL
                        .iter()
                        .map(|s| view! { <option value=s.value()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <div class="filters__modes">
                    <button
                        class=move || if mode.get() == ViewMode::Grid { "filters__mode filters__mode--active" } else { "filters__mode" }
                        title="Grid view"
                        on:click=move |_| mode.set(ViewMode::Grid)
                    >
                        "▦"
                    </button>
                    <button
                        class=move || if mode.get() == ViewMode::List { "filters__mode filters__mode--active" } else { "filters__mode" }
                        title="List view"
                        on:click=move |_| mode.set(ViewMode::List)
                    >
                        "☰"
                    </button>
                </div>
            </div>
            <p class="filters__count">{move || format!("Showing {} of {} blogs", visible.with(Vec::len), posts.with(Vec::len))}</p>
            {move || match status() {
                ListStatus::Populated => {
                    let mode = mode.get();
                    let grid_class = match mode {
                        ViewMode::Grid => "blog-grid",
                        ViewMode::List => "blog-list",
                    };
                    view! {
                        <div class=grid_class>
                            <For each=move || visible.get() key=|p| (p.id, p.likes) let:post>
                                {
                                    let id = post.id;
                                    view! {
                                        <BlogCard
                                            post=post
                                            mode=mode
                                            liked=Signal::derive(move || liked.with(|l| l.contains(&id)))
                                            on_like=on_like
                                        />
                                    }
                                }
                            </For>
                        </div>
                    }
                        .into_any()
                }
                other => {
                    view! {
                        <EmptyState status=other empty_title="No blogs yet" empty_message="Check back soon for new posts."/>
                        <button class="btn btn--ghost" on:click=on_reset>"Clear filters"</button>
                    }
                        .into_any()
                }
            }}
            <Show when=has_more>
                <div class="load-more">
                    <button class="btn btn--primary" disabled=move || loading.get() on:click=move |_| load_more()>
                        {move || if loading.get() { "Loading…" } else { "Load more" }}
                    </button>
                </div>
            </Show>
        </main>
    }
}
