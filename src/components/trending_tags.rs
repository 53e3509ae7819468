//! Trending tag chips linking to the filtered feed.

use leptos::prelude::*;
use leptos_router::components::A;

use super::header::search_href;
use crate::data::seed::TRENDING_TAGS;

#[component]
pub fn TrendingTags() -> impl IntoView {
    view! {
        <section class="section">
            <h2 class="section__title">"Trending Tags"</h2>
            <div class="tag-cloud">
                {TRENDING_TAGS
                    .iter()
                    .map(|tag| view! { <A href=search_href(tag) attr:class="tag">{format!("#{tag}")}</A> })
                    .collect_view()}
            </div>
        </section>
    }
}
