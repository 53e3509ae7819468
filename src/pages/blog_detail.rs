//! Blog detail page: markdown article, reactions, sharing, and comments.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::markdown_preview::MarkdownPreview;
use crate::components::toaster::push_toast;
use crate::components::user_avatar::UserAvatar;
use crate::data::seed;
use crate::listing::blogs::parse_post_id;
use crate::listing::relative_time::short_date;
use crate::listing::stats::compact_count;
use crate::state::article::ArticleView;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::avatar::AvatarSize;
use crate::util::browser;

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let id = parse_post_id(use_params_map().with_untracked(|p| p.get("id")));
    match id {
        Some(id) => view! { <ArticleScreen id=id/> }.into_any(),
        None => view! {
            <main class="page">
                <h1 class="page__title">"Blog not found"</h1>
                <A href="/blogs" attr:class="btn btn--primary">"Browse all blogs"</A>
            </main>
        }
        .into_any(),
    }
}

#[component]
fn ArticleScreen(id: u32) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(ArticleView::new(seed::article(id), seed::comments()));
    let article = state.with_untracked(|s| s.article.clone());

    let on_like = move |_| state.update(ArticleView::toggle_like);
    let on_bookmark = move |_| {
        let mut saved = false;
        state.update(|s| saved = s.toggle_bookmark());
        push_toast(toasts, if saved { "Bookmarked" } else { "Bookmark removed" }, "");
    };
    let on_follow = move |_| {
        let mut following = false;
        state.update(|s| following = s.toggle_follow());
        let author = state.with_untracked(|s| s.article.author.clone());
        let title = if following { format!("Following {author}") } else { format!("Unfollowed {author}") };
        push_toast(toasts, &title, "");
    };
    let on_share = move |_| {
        browser::prompt_copy("Copy this link to share:", &browser::absolute_url(&format!("/blog/{id}")));
    };
    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let author = session.with_untracked(|s| if s.logged_in { s.display_name() } else { "Anonymous".to_owned() });
        let mut posted = false;
        state.update(|s| posted = s.post_comment(&author));
        if posted {
            push_toast(toasts, "Comment posted", "");
        }
    };

    let author_email = format!("{}@techblog.dev", article.author.to_lowercase().replace(' ', "."));
    let content = article.content.clone();

    view! {
        <main class="page page--article">
            <button class="btn btn--ghost" on:click=move |_| browser::history_back()>"← Back"</button>
            <article class="article">
                <img class="article__cover" src=article.thumbnail.clone() alt=article.title.clone()/>
                <h1 class="article__title">{article.title.clone()}</h1>
                <div class="article__byline">
                    <UserAvatar name=article.author.clone() email=author_email size=AvatarSize::Medium/>
                    <div class="article__author">
                        <div class="article__author-name">{article.author.clone()}</div>
                        <div class="article__author-bio">{article.author_bio.clone()}</div>
                    </div>
                    <button class="btn btn--outline" on:click=on_follow>
                        {move || if state.with(|s| s.following_author) { "Following" } else { "Follow" }}
                    </button>
                </div>
                <div class="article__meta">
                    <span>{short_date(&article.published_at)}</span>
                    <span>{format!("{} min read", article.read_time_minutes)}</span>
                    <span>{format!("{} views", compact_count(u64::from(article.views)))}</span>
                </div>
                <div class="article__tags">
                    {article.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
                </div>
                <MarkdownPreview source=Signal::derive(move || content.clone())/>
                <div class="article__actions">
                    <button
                        class=move || if state.with(|s| s.liked) { "article__action article__action--active" } else { "article__action" }
                        on:click=on_like
                    >
                        {move || format!("♥ {}", state.with(|s| s.article.likes))}
                    </button>
                    <span class="article__action">{move || format!("💬 {}", state.with(|s| s.article.comments))}</span>
                    <button
                        class=move || if state.with(|s| s.bookmarked) { "article__action article__action--active" } else { "article__action" }
                        on:click=on_bookmark
                    >
                        "🔖"
                    </button>
                    <button class="article__action" on:click=on_share>"Share"</button>
                </div>
            </article>
            <section class="comments">
                <h2 class="comments__title">{move || format!("Comments ({})", state.with(|s| s.comments.len()))}</h2>
                <form class="comments__form" on:submit=on_comment>
                    <textarea
                        class="comments__input"
                        placeholder="Share your thoughts..."
                        prop:value=move || state.with(|s| s.draft.clone())
                        on:input=move |ev| state.update(|s| s.draft = event_target_value(&ev))
                    ></textarea>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || state.with(|s| s.draft.trim().is_empty())
                    >
                        "Post comment"
                    </button>
                </form>
                <For each=move || state.with(|s| s.comments.clone()) key=|c| c.id let:comment>
                    <div class="comment">
                        <div class="comment__author">{comment.author}</div>
                        <p class="comment__body">{comment.body}</p>
                        <span class="comment__likes">{format!("♥ {}", comment.likes)}</span>
                    </div>
                </For>
            </section>
        </main>
    }
}
