//! All-blogs feed: search, category/tag selectors, sort order, likes.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use std::collections::BTreeSet;

use super::search::matches_term;
use crate::data::records::BlogPost;

/// Selector value meaning "no filter".
pub const ALL: &str = "all";

/// Feed sort order, keyed by the `<select>` option value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Latest,
    Oldest,
    MostLiked,
    MostViewed,
    MostCommented,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Latest,
        SortOrder::Oldest,
        SortOrder::MostLiked,
        SortOrder::MostViewed,
        SortOrder::MostCommented,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::MostLiked => "most-liked",
            Self::MostViewed => "most-viewed",
            Self::MostCommented => "most-commented",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Oldest => "Oldest",
            Self::MostLiked => "Most Liked",
            Self::MostViewed => "Most Viewed",
            Self::MostCommented => "Most Commented",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to latest.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|order| order.value() == value)
            .unwrap_or_default()
    }
}

/// Grid or list rendering of the feed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Current feed controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogQuery {
    pub term: String,
    /// Category selector value; [`ALL`] disables the filter.
    pub category: String,
    /// Tag selector value; [`ALL`] disables the filter.
    pub tag: String,
    pub sort: SortOrder,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: ALL.to_owned(),
            tag: ALL.to_owned(),
            sort: SortOrder::Latest,
        }
    }
}

impl BlogQuery {
    /// Whether `post` passes the search, category, and tag filters.
    pub fn matches(&self, post: &BlogPost) -> bool {
        if !matches_term(post, &self.term) {
            return false;
        }
        if self.category != ALL && post.category != self.category {
            return false;
        }
        if self.tag != ALL && !post.tags.iter().any(|t| *t == self.tag) {
            return false;
        }
        true
    }

    /// Filtered and sorted copy of `posts`.
    pub fn apply(&self, posts: &[BlogPost]) -> Vec<BlogPost> {
        let mut visible: Vec<BlogPost> = posts.iter().filter(|p| self.matches(p)).cloned().collect();
        sort_posts(&mut visible, self.sort);
        visible
    }
}

/// Stable sort in place. RFC 3339 UTC strings order chronologically, so
/// dates compare as text.
pub fn sort_posts(posts: &mut [BlogPost], order: SortOrder) {
    match order {
        SortOrder::Latest => posts.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => posts.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::MostLiked => posts.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortOrder::MostViewed => posts.sort_by(|a, b| b.views.cmp(&a.views)),
        SortOrder::MostCommented => posts.sort_by(|a, b| b.comments.cmp(&a.comments)),
    }
}

/// Flip the like on `id`, adjusting its counter. Returns whether the post is
/// now liked.
pub fn toggle_like(posts: &mut [BlogPost], liked: &mut BTreeSet<u32>, id: u32) -> bool {
    let now_liked = if liked.remove(&id) {
        false
    } else {
        liked.insert(id);
        true
    };
    if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
        post.likes = if now_liked { post.likes + 1 } else { post.likes.saturating_sub(1) };
    }
    now_liked
}

/// Post id from a `:id` route segment; `None` when absent or not a number.
pub fn parse_post_id(raw: Option<String>) -> Option<u32> {
    raw?.trim().parse().ok()
}

/// Whether a document scrolled to `scroll_top` shows content within `margin`
/// pixels of its bottom edge.
pub fn near_bottom(viewport_height: i32, scroll_top: i32, content_height: i32, margin: i32) -> bool {
    i64::from(viewport_height) + i64::from(scroll_top) + i64::from(margin) >= i64::from(content_height)
}

/// Id of the first record on the next "load more" page, or `None` once the
/// feed has reached `cap`.
pub fn next_page_start(loaded: usize, page_size: usize, cap: usize) -> Option<u32> {
    if loaded >= cap || page_size == 0 {
        return None;
    }
    u32::try_from(loaded + 1).ok()
}
