use super::*;
use crate::data::seed;

fn view() -> ArticleView {
    ArticleView::new(seed::article(1), seed::comments())
}

#[test]
fn like_toggle_adjusts_count() {
    let mut v = view();
    let before = v.article.likes;
    v.toggle_like();
    assert!(v.liked);
    assert_eq!(v.article.likes, before + 1);
    v.toggle_like();
    assert_eq!(v.article.likes, before);
}

#[test]
fn posting_appends_with_next_id_and_clears_draft() {
    let mut v = view();
    let count = v.article.comments;
    v.draft = "  Nice write-up  ".to_owned();
    assert!(v.post_comment("Test"));
    let last = v.comments.last().expect("comment appended");
    assert_eq!(last.id, 4);
    assert_eq!(last.body, "Nice write-up");
    assert_eq!(last.author, "Test");
    assert_eq!(v.draft, "");
    assert_eq!(v.article.comments, count + 1);
}

#[test]
fn blank_comment_is_ignored() {
    let mut v = view();
    v.draft = "   ".to_owned();
    assert!(!v.post_comment("Test"));
    assert_eq!(v.comments.len(), 3);
}

#[test]
fn follow_and_bookmark_flip() {
    let mut v = view();
    assert!(v.toggle_follow());
    assert!(!v.toggle_follow());
    assert!(v.toggle_bookmark());
}
