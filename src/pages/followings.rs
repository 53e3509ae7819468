//! Authors the user follows, with search and follow toggles.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::search_bar::SearchBar;
use crate::components::user_avatar::UserAvatar;
use crate::data::records::Following;
use crate::data::seed;
use crate::listing::search::{ListStatus, filter_by_term, list_status};
use crate::listing::stats::compact_count;
use crate::util::avatar::AvatarSize;

#[component]
pub fn FollowingsPage() -> impl IntoView {
    let items = RwSignal::new(seed::followings());
    let term = RwSignal::new(String::new());

    let visible = Memo::new(move |_| items.with(|all| filter_by_term(all, &term.get())));
    let status = move || list_status(items.with(Vec::len), visible.with(Vec::len));
    let following_count = move || items.with(|all| all.iter().filter(|f| f.following).count());

    view! {
        <main class="page page--list">
            <div class="page__header">
                <h1 class="page__title">"Followings"</h1>
                <span class="page__count">{move || format!("Following {}", following_count())}</span>
            </div>
            <SearchBar term=term placeholder="Search by name or username..."/>
            {move || match status() {
                ListStatus::Populated => view! {
                    <div class="card-grid">
                        <For each=move || visible.get() key=|f| (f.id, f.following) let:author>
                            <FollowingCard author=author items=items/>
                        </For>
                    </div>
                }
                .into_any(),
                other => view! {
                    <EmptyState status=other empty_title="Not following anyone" empty_message="Follow authors to see them here."/>
                }
                .into_any(),
            }}
        </main>
    }
}

#[component]
fn FollowingCard(author: Following, items: RwSignal<Vec<Following>>) -> impl IntoView {
    let id = author.id;
    let on_toggle = move |_| {
        items.update(|all| {
            if let Some(entry) = all.iter_mut().find(|f| f.id == id) {
                entry.toggle_follow();
                log::debug!("{} following={}", entry.username, entry.following);
            }
        });
    };
    let (label, class) = if author.following {
        ("Following", "btn btn--outline")
    } else {
        ("Follow", "btn btn--primary")
    };

    view! {
        <div class="card card--author">
            <UserAvatar name=author.name.clone() email=author.email size=AvatarSize::Large image=author.profile_image/>
            <div class="card__body">
                <h3 class="card__title">{author.name}</h3>
                <div class="card__subtitle">{format!("@{}", author.username)}</div>
                <p class="card__excerpt">{author.bio}</p>
                <div class="card__meta">{format!("{} followers", compact_count(u64::from(author.followers)))}</div>
                <button class=class on:click=on_toggle>{label}</button>
            </div>
        </div>
    }
}
