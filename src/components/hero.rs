//! Landing-page hero with an auto-advancing slideshow.

use leptos::prelude::*;
use leptos_router::components::A;

use super::auth_modal::AuthModalHandle;
use crate::config::CAROUSEL_INTERVAL_MS;
use crate::state::auth::AuthView;
use crate::state::carousel::Carousel;
use crate::state::session::SessionState;
use crate::util::clock::spawn_ticker;

struct Slide {
    title: &'static str,
    subtitle: &'static str,
    class: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        title: "Learn, Collaborate, Grow",
        subtitle: "Join our community of tech enthusiasts and level up your skills.",
        class: "hero__slide hero__slide--purple",
    },
    Slide {
        title: "Write What You Know",
        subtitle: "Publish tutorials and deep dives with a markdown editor built for developers.",
        class: "hero__slide hero__slide--blue",
    },
    Slide {
        title: "Follow the Builders",
        subtitle: "Keep up with the authors shaping web, mobile, AI and DevOps.",
        class: "hero__slide hero__slide--pink",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let modal = expect_context::<AuthModalHandle>();
    let carousel = RwSignal::new(Carousel::new(SLIDES.len()));

    spawn_ticker(CAROUSEL_INTERVAL_MS, move || {
        carousel.update(Carousel::next);
        true
    });

    let slide = move || &SLIDES[carousel.with(|c| c.index)];

    view! {
        <section class=move || slide().class>
            <div class="hero__content">
                <h1 class="hero__title">{move || slide().title}</h1>
                <p class="hero__subtitle">{move || slide().subtitle}</p>
                <div class="hero__actions">
                    <Show
                        when=move || session.with(|s| s.logged_in)
                        fallback=move || {
                            view! {
                                <button class="btn btn--light" on:click=move |_| modal.open_at(AuthView::Signup)>
                                    "Get Started"
                                </button>
                            }
                        }
                    >
                        <A href="/new-blog" attr:class="btn btn--light">"Start Writing"</A>
                    </Show>
                    <A href="/blogs" attr:class="btn btn--outline-light">"Explore Blogs"</A>
                </div>
            </div>
            <button class="hero__nav hero__nav--prev" title="Previous" on:click=move |_| carousel.update(Carousel::prev)>
                "‹"
            </button>
            <button class="hero__nav hero__nav--next" title="Next" on:click=move |_| carousel.update(Carousel::next)>
                "›"
            </button>
            <div class="hero__dots">
                {(0..SLIDES.len())
                    .map(|i| {
                        view! {
                            <button
                                class=move || {
                                    if carousel.with(|c| c.index == i) { "hero__dot hero__dot--active" } else { "hero__dot" }
                                }
                                title=format!("Slide {}", i + 1)
                                on:click=move |_| carousel.update(|c| c.go_to(i))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
