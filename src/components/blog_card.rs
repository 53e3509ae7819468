//! Feed card for one blog post, in grid or list layout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::data::records::BlogPost;
use crate::listing::blogs::ViewMode;
use crate::listing::relative_time::short_date;
use crate::listing::stats::compact_count;

#[component]
pub fn BlogCard(
    post: BlogPost,
    mode: ViewMode,
    #[prop(into)] liked: Signal<bool>,
    on_like: Callback<u32>,
) -> impl IntoView {
    let id = post.id;
    let likes = post.likes;
    let alt = post.title.clone();
    let class = match mode {
        ViewMode::Grid => "blog-card",
        ViewMode::List => "blog-card blog-card--list",
    };

    view! {
        <article class=class>
            <A href=format!("/blog/{id}") attr:class="blog-card__thumb">
                <img class="blog-card__image" src=post.thumbnail alt=alt/>
                <span class="blog-card__category">{post.category}</span>
            </A>
            <div class="blog-card__body">
                <div class="blog-card__meta">
                    <span>{post.author}</span>
                    <span>{short_date(&post.date)}</span>
                    <span>{format!("{} min read", post.read_time_minutes)}</span>
                </div>
                <A href=format!("/blog/{id}") attr:class="blog-card__title">{post.title}</A>
                <p class="blog-card__excerpt">{post.excerpt}</p>
                <div class="blog-card__tags">
                    {post.tags.into_iter().map(|t| view! { <span class="tag tag--small">{t}</span> }).collect_view()}
                </div>
                <div class="blog-card__stats">
                    <button
                        class=move || if liked.get() { "blog-card__like blog-card__like--active" } else { "blog-card__like" }
                        on:click=move |_| on_like.run(id)
                    >
                        {move || format!("♥ {likes}")}
                    </button>
                    <span>{format!("💬 {}", post.comments)}</span>
                    <span>{format!("👁 {}", compact_count(u64::from(post.views)))}</span>
                </div>
            </div>
        </article>
    }
}
