//! Rendered markdown body.

use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

/// Renders `source` as HTML. Raw HTML in the source is dropped before it
/// reaches `inner_html`.
#[component]
pub fn MarkdownPreview(#[prop(into)] source: Signal<String>) -> impl IntoView {
    let html = move || render_markdown_html(&source.get());
    view! { <div class="markdown-body" inner_html=html></div> }
}
