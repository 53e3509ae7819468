//! Reader interactions on the blog detail page.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use crate::data::records::{Article, Comment};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleView {
    pub article: Article,
    pub liked: bool,
    pub bookmarked: bool,
    pub following_author: bool,
    pub comments: Vec<Comment>,
    /// Text of the comment being written.
    pub draft: String,
}

impl ArticleView {
    pub fn new(article: Article, comments: Vec<Comment>) -> Self {
        Self { article, liked: false, bookmarked: false, following_author: false, comments, draft: String::new() }
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
        let likes = &mut self.article.likes;
        *likes = if self.liked { *likes + 1 } else { likes.saturating_sub(1) };
    }

    pub fn toggle_bookmark(&mut self) -> bool {
        self.bookmarked = !self.bookmarked;
        self.bookmarked
    }

    pub fn toggle_follow(&mut self) -> bool {
        self.following_author = !self.following_author;
        self.following_author
    }

    /// Append the draft as a comment by `author`. Blank drafts are ignored.
    pub fn post_comment(&mut self, author: &str) -> bool {
        let body = self.draft.trim();
        if body.is_empty() {
            return false;
        }
        let id = self.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.comments.push(Comment { id, author: author.to_owned(), body: body.to_owned(), likes: 0 });
        self.article.comments += 1;
        self.draft.clear();
        true
    }
}
