//! Profile page: editable profile form and the author stats dashboard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::user_avatar::UserAvatar;
use crate::data::records::Profile;
use crate::data::seed;
use crate::listing::relative_time::short_date;
use crate::listing::stats::{PostStats, compact_count};
use crate::state::session::SessionState;
use crate::util::avatar::AvatarSize;
use crate::util::browser;

type Getter = fn(&Profile) -> &String;
type Setter = fn(&mut Profile) -> &mut String;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let profile = RwSignal::new(session.with_untracked(|s| seed::profile(s.email_or_empty())));
    let saving = RwSignal::new(false);
    let posts = seed::my_posts();
    let stats = PostStats::from_posts(&posts);

    let on_avatar = move |ev: leptos::ev::Event| {
        if let Some(url) = browser::picked_file_url(&ev) {
            profile.update(|p| p.profile_image = Some(url));
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        log::info!("saving profile for {}", profile.with_untracked(|p| p.email.clone()));
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::util::clock::sleep_ms(crate::config::SIMULATED_SAVE_MS).await;
            saving.set(false);
            browser::alert("Profile updated successfully!");
        });
    };

    view! {
        <main class="page page--profile">
            <section class="stats">
                <StatCard label="Posts" value=stats.posts.to_string()/>
                <StatCard label="Total likes" value=compact_count(stats.likes)/>
                <StatCard label="Total views" value=compact_count(stats.views)/>
                <StatCard label="Comments" value=compact_count(stats.comments)/>
            </section>
            <div class="profile__grid">
                <form class="profile__form" on:submit=on_save>
                    <h2 class="section__title">"Profile"</h2>
                    <div class="profile__avatar">
                        {move || {
                            let p = profile.get();
                            view! { <UserAvatar name=p.name email=p.email size=AvatarSize::Large image=p.profile_image/> }
                        }}
                        <label class="btn btn--ghost">
                            "Change photo"
                            <input type="file" accept="image/*" class="editor__file" on:change=on_avatar/>
                        </label>
                    </div>
                    {field(profile, "Full name", "text", |p| &p.name, |p| &mut p.name)}
                    {field(profile, "Username", "text", |p| &p.username, |p| &mut p.username)}
                    {field(profile, "Email", "email", |p| &p.email, |p| &mut p.email)}
                    {field(profile, "Phone", "tel", |p| &p.phone, |p| &mut p.phone)}
                    {field(profile, "Website", "url", |p| &p.website, |p| &mut p.website)}
                    {field(profile, "Location", "text", |p| &p.location, |p| &mut p.location)}
                    <label class="profile__field">
                        <span class="profile__label">"Bio"</span>
                        <textarea
                            class="profile__input"
                            rows="4"
                            prop:value=move || profile.with(|p| p.bio.clone())
                            on:input=move |ev| profile.update(|p| p.bio = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving…" } else { "Save changes" }}
                    </button>
                </form>
                <section class="profile__posts">
                    <div class="section__header">
                        <h2 class="section__title">"My Posts"</h2>
                        <A href="/new-blog" attr:class="btn btn--primary">"New post"</A>
                    </div>
                    {posts
                        .into_iter()
                        .map(|post| {
                            view! {
                                <div class="post-row">
                                    <div class="post-row__main">
                                        <A href=format!("/blog/{}", post.id) attr:class="post-row__title">{post.title}</A>
                                        <div class="post-row__meta">
                                            <span>{short_date(&post.date)}</span>
                                            <span>{format!("♥ {}", post.likes)}</span>
                                            <span>{format!("💬 {}", post.comments)}</span>
                                            <span>{format!("👁 {}", compact_count(u64::from(post.views)))}</span>
                                        </div>
                                    </div>
                                    <A href=format!("/edit-blog/{}", post.id) attr:class="btn btn--ghost">"Edit"</A>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>
            </div>
        </main>
    }
}

fn field(profile: RwSignal<Profile>, label: &'static str, kind: &'static str, get: Getter, set: Setter) -> impl IntoView {
    view! {
        <label class="profile__field">
            <span class="profile__label">{label}</span>
            <input
                class="profile__input"
                type=kind
                prop:value=move || profile.with(|p| get(p).clone())
                on:input=move |ev| profile.update(|p| *set(p) = event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}
