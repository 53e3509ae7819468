//! Recent video cards on the landing page.

use leptos::prelude::*;

use crate::data::seed;

#[component]
pub fn RecentVideos() -> impl IntoView {
    view! {
        <section class="section">
            <h2 class="section__title">"Recent Videos"</h2>
            <div class="card-grid card-grid--videos">
                {seed::videos()
                    .into_iter()
                    .map(|video| {
                        view! {
                            <div class="card card--video">
                                <div class="card__thumb">
                                    <img class="card__image" src=video.thumbnail alt=video.title/>
                                    <span class="card__duration">{video.duration}</span>
                                </div>
                                <div class="card__body">
                                    <h3 class="card__title">{video.title}</h3>
                                    <div class="card__meta">
                                        <span>{video.author}</span>
                                        <span>{video.views}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
