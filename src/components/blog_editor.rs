//! Markdown editor form used by the new-blog and edit-blog pages.

use leptos::prelude::*;

use super::markdown_preview::MarkdownPreview;
use crate::config::MARKDOWN_GUIDE_URL;
use crate::state::editor::{EditorDraft, EditorTab};
use crate::util::browser;

/// Thumbnail, title, tags, and a write/preview markdown body. `on_save` runs
/// only when the draft can be saved.
#[component]
pub fn BlogEditor(
    draft: RwSignal<EditorDraft>,
    #[prop(into)] save_label: String,
    on_save: Callback<()>,
) -> impl IntoView {
    let on_thumbnail = move |ev: leptos::ev::Event| {
        if let Some(url) = browser::picked_file_url(&ev) {
            draft.update(|d| d.thumbnail = Some(url));
        }
    };
    let tab = move || draft.with(|d| d.tab);
    let tab_class = move |which: EditorTab| {
        move || if tab() == which { "editor__tab editor__tab--active" } else { "editor__tab" }
    };
    let saving = move || draft.with(|d| d.saving);

    view! {
        <div class="editor">
            <label class="editor__thumbnail">
                {move || {
                    draft
                        .with(|d| d.thumbnail.clone())
                        .map_or_else(
                            || view! { <span class="editor__thumbnail-hint">"Add a cover image"</span> }.into_any(),
                            |src| view! { <img class="editor__thumbnail-image" src=src alt="Cover"/> }.into_any(),
                        )
                }}
                <input type="file" accept="image/*" class="editor__file" on:change=on_thumbnail/>
            </label>
            <input
                class="editor__title"
                type="text"
                placeholder="Blog title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />
            <input
                class="editor__tags"
                type="text"
                placeholder="Tags, separated by commas"
                prop:value=move || draft.with(|d| d.tags_input.clone())
                on:input=move |ev| draft.update(|d| d.tags_input = event_target_value(&ev))
            />
            <div class="editor__tag-preview">
                {move || {
                    draft
                        .with(EditorDraft::tags)
                        .into_iter()
                        .map(|t| view! { <span class="tag tag--small">{t}</span> })
                        .collect_view()
                }}
            </div>
            <div class="editor__tabs">
                <button class=tab_class(EditorTab::Write) on:click=move |_| draft.update(|d| d.tab = EditorTab::Write)>
                    "Write"
                </button>
                <button
                    class=tab_class(EditorTab::Preview)
                    on:click=move |_| draft.update(|d| d.tab = EditorTab::Preview)
                >
                    "Preview"
                </button>
                <button class="editor__guide" on:click=move |_| browser::open_in_new_tab(MARKDOWN_GUIDE_URL)>
                    "Markdown guide"
                </button>
            </div>
            <Show
                when=move || tab() == EditorTab::Preview
                fallback=move || {
                    view! {
                        <textarea
                            class="editor__content"
                            placeholder="Write your story in markdown..."
                            prop:value=move || draft.with(|d| d.content.clone())
                            on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                        ></textarea>
                    }
                }
            >
                <MarkdownPreview source=Signal::derive(move || draft.with(|d| d.content.clone()))/>
            </Show>
            <div class="editor__actions">
                <button class="btn btn--ghost" on:click=move |_| browser::history_back()>"Cancel"</button>
                <button
                    class="btn btn--primary"
                    disabled=move || !draft.with(EditorDraft::can_save)
                    on:click=move |_| on_save.run(())
                >
                    {move || if saving() { "Saving…".to_owned() } else { save_label.clone() }}
                </button>
            </div>
        </div>
    }
}
