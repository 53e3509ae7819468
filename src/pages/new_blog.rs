//! New-blog editor page.

use leptos::prelude::*;

use crate::components::blog_editor::BlogEditor;
use crate::state::editor::EditorDraft;

#[component]
pub fn NewBlogPage() -> impl IntoView {
    let draft = RwSignal::new(EditorDraft::default());

    let on_save = Callback::new(move |()| {
        let mut started = false;
        draft.update(|d| started = d.begin_save());
        if !started {
            return;
        }
        let (title, tags) = draft.with_untracked(|d| (d.title.clone(), d.tags()));
        log::info!("publishing \"{title}\" tagged {tags:?}");
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::util::clock::sleep_ms(crate::config::SIMULATED_SAVE_MS).await;
            draft.set(EditorDraft::default());
            crate::util::browser::alert("Blog published successfully!");
        });
    });

    view! {
        <main class="page page--editor">
            <h1 class="page__title">"Write a new blog"</h1>
            <BlogEditor draft=draft save_label="Publish" on_save=on_save/>
        </main>
    }
}
