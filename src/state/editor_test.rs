use super::*;
use crate::data::seed;

#[test]
fn save_requires_title_and_content() {
    let mut draft = EditorDraft::default();
    assert!(!draft.can_save());
    draft.title = "Hello".to_owned();
    assert!(!draft.can_save());
    draft.content = "   ".to_owned();
    assert!(!draft.can_save());
    draft.content = "# Body".to_owned();
    assert!(draft.can_save());
}

#[test]
fn begin_save_blocks_double_submit() {
    let mut draft = EditorDraft { title: "T".to_owned(), content: "C".to_owned(), ..EditorDraft::default() };
    assert!(draft.begin_save());
    assert!(!draft.can_save());
    assert!(!draft.begin_save());
    draft.finish_save();
    assert!(draft.can_save());
}

#[test]
fn tags_are_split_trimmed_and_deduplicated() {
    let draft = EditorDraft { tags_input: " react, TypeScript,,React , css ".to_owned(), ..EditorDraft::default() };
    assert_eq!(draft.tags(), ["react", "TypeScript", "css"]);
    assert!(EditorDraft::default().tags().is_empty());
}

#[test]
fn from_article_prefills_the_draft() {
    let draft = EditorDraft::from_article(&seed::editable_article(1));
    assert_eq!(draft.title, "Getting Started with React and TypeScript");
    assert_eq!(draft.tags_input, "React, TypeScript");
    assert!(draft.content.starts_with("# Getting Started"));
    assert_eq!(draft.tab, EditorTab::Write);
    assert!(draft.can_save());
}
