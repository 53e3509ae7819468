//! Draft state shared by the new-blog and edit-blog pages.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::data::records::Article;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorTab {
    #[default]
    Write,
    Preview,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorDraft {
    pub title: String,
    /// Raw comma-separated tag input.
    pub tags_input: String,
    /// Markdown body.
    pub content: String,
    /// Object URL of the picked thumbnail.
    pub thumbnail: Option<String>,
    pub tab: EditorTab,
    pub saving: bool,
}

impl EditorDraft {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            tags_input: article.tags.join(", "),
            content: article.content.clone(),
            thumbnail: Some(article.thumbnail.clone()),
            ..Self::default()
        }
    }

    /// Trimmed, non-empty tags in entry order, without duplicates.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags_input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|existing| existing.eq_ignore_ascii_case(tag)) {
                tags.push(tag.to_owned());
            }
        }
        tags
    }

    /// Save needs a title and a body, and no save in flight.
    pub fn can_save(&self) -> bool {
        !self.saving && !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Mark the draft as saving. Returns `false` when saving is not allowed.
    pub fn begin_save(&mut self) -> bool {
        if !self.can_save() {
            return false;
        }
        self.saving = true;
        true
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }
}
