//! "Most liked" card row on the landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::data::seed;

#[component]
pub fn MostLikedBlogs() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section__header">
                <h2 class="section__title">"Most Liked Blogs"</h2>
                <A href="/blogs" attr:class="section__more">"View all →"</A>
            </div>
            <div class="card-grid">
                {seed::featured_posts()
                    .into_iter()
                    .map(|post| {
                        view! {
                            <A href=format!("/blog/{}", post.id) attr:class="card">
                                <img class="card__image" src=post.image alt=post.title/>
                                <div class="card__body">
                                    <span class="card__category">{post.category}</span>
                                    <h3 class="card__title">{post.title}</h3>
                                    <div class="card__meta">
                                        <span>{post.author}</span>
                                        <span>{post.date}</span>
                                        <span>{post.read_time}</span>
                                    </div>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
