//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let subscribed = RwSignal::new(false);
    let email = RwSignal::new(String::new());

    let on_subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if email.with_untracked(|e| e.trim().is_empty()) {
            return;
        }
        log::info!("newsletter signup: {}", email.get_untracked().trim());
        subscribed.set(true);
    };

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <div class="footer__brand">"TechBlog"</div>
                    <p>"Stories, tutorials and videos from developers, for developers."</p>
                </div>
                <div>
                    <h3 class="footer__heading">"Quick Links"</h3>
                    <ul class="footer__links">
                        <li><A href="/">"Home"</A></li>
                        <li><A href="/blogs">"Blogs"</A></li>
                        <li><A href="/profile">"Dashboard"</A></li>
                        <li><A href="/followings">"Community"</A></li>
                    </ul>
                </div>
                <div>
                    <h3 class="footer__heading">"Subscribe"</h3>
                    <p>"Get the latest articles and news right to your inbox."</p>
                    <Show
                        when=move || subscribed.get()
                        fallback=move || {
                            view! {
                                <form class="footer__subscribe" on:submit=on_subscribe>
                                    <input
                                        type="email"
                                        placeholder="Your email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                    <button class="btn btn--primary" type="submit">"Subscribe"</button>
                                </form>
                            }
                        }
                    >
                        <p class="footer__thanks">"Thanks for subscribing!"</p>
                    </Show>
                </div>
            </div>
            <div class="footer__bottom">"© 2024 TechBlog. All rights reserved."</div>
        </footer>
    }
}
