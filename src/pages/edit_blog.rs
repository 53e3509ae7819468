//! Edit-blog page, pre-filled with the stored article.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::blog_editor::BlogEditor;
use crate::data::seed;
use crate::listing::blogs::parse_post_id;
use crate::state::editor::EditorDraft;

#[component]
pub fn EditBlogPage() -> impl IntoView {
    match parse_post_id(use_params_map().with_untracked(|p| p.get("id"))) {
        Some(id) => view! { <EditScreen id=id/> }.into_any(),
        None => {
            log::warn!("edit requested for a malformed blog id");
            view! {
                <main class="page">
                    <h1 class="page__title">"Blog not found"</h1>
                    <A href="/profile" attr:class="btn btn--primary">"Back to your posts"</A>
                </main>
            }
            .into_any()
        }
    }
}

#[component]
fn EditScreen(id: u32) -> impl IntoView {
    let draft = RwSignal::new(EditorDraft::from_article(&seed::editable_article(id)));
    let navigate = use_navigate();
    let saved = RwSignal::new(false);

    Effect::new(move || {
        if saved.get() {
            navigate("/profile", NavigateOptions::default());
        }
    });

    let on_save = Callback::new(move |()| {
        let mut started = false;
        draft.update(|d| started = d.begin_save());
        if !started {
            return;
        }
        log::info!("updating blog {id}: {:?}", draft.with_untracked(EditorDraft::tags));
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::util::clock::sleep_ms(crate::config::SIMULATED_SAVE_MS).await;
            draft.update(EditorDraft::finish_save);
            crate::util::browser::alert("Blog updated successfully!");
            saved.set(true);
        });
    });

    view! {
        <main class="page page--editor">
            <h1 class="page__title">{format!("Edit blog #{id}")}</h1>
            <BlogEditor draft=draft save_label="Update" on_save=on_save/>
        </main>
    }
}
