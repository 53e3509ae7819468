//! Landing page.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::knowledge_share::KnowledgeShare;
use crate::components::most_liked_blogs::MostLikedBlogs;
use crate::components::recent_videos::RecentVideos;
use crate::components::trending_tags::TrendingTags;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <Hero/>
        <main class="page page--landing">
            <MostLikedBlogs/>
            <TrendingTags/>
            <RecentVideos/>
        </main>
        <KnowledgeShare/>
    }
}
