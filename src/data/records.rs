//! Flat records shown by the list and detail pages.
//!
//! Timestamps are RFC 3339 strings, the shape a JSON API would hand back.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Serialize};

/// A blog post in the all-blogs feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    /// Publication time (RFC 3339).
    pub date: String,
    pub read_time_minutes: u32,
    pub thumbnail: String,
    pub likes: u32,
    pub comments: u32,
    pub views: u32,
    pub tags: Vec<String>,
    pub category: String,
}

/// Full article for the detail and edit pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub title: String,
    /// Markdown body.
    pub content: String,
    pub author: String,
    pub author_bio: String,
    pub published_at: String,
    pub read_time_minutes: u32,
    pub thumbnail: String,
    pub likes: u32,
    pub comments: u32,
    pub views: u32,
    pub tags: Vec<String>,
}

/// One entry of the reading history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub author: String,
    pub read_at: String,
    pub read_time: u32,
    pub likes: u32,
    pub views: u32,
}

/// A bookmarked article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub author: String,
    pub bookmarked_at: String,
    pub read_time: u32,
    pub likes: u32,
    pub views: u32,
    pub tags: Vec<String>,
    pub url: String,
}

/// An article saved for later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBlog {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub author: String,
    pub saved_at: String,
    pub read_time: u32,
    pub likes: u32,
    pub views: u32,
    pub category: String,
}

/// An author the user follows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Following {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub username: String,
    pub bio: String,
    pub followers: u32,
    pub following: bool,
    pub profile_image: Option<String>,
}

impl Following {
    /// Flip the follow flag and move the follower count with it.
    pub fn toggle_follow(&mut self) {
        self.following = !self.following;
        self.followers = if self.following { self.followers + 1 } else { self.followers.saturating_sub(1) };
    }
}

/// Notification severity, drives the dot color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
}

/// Header notification entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    /// Pre-rendered relative label ("2 hours ago").
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

/// Editable profile of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub username: String,
    pub bio: String,
    pub website: String,
    pub location: String,
    pub phone: String,
    pub profile_image: Option<String>,
}

/// Landing-page video card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Video {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub views: &'static str,
    pub duration: &'static str,
    pub thumbnail: &'static str,
}

/// Landing-page "most liked" card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeaturedPost {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
}

/// A comment under an article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub body: String,
    pub likes: u32,
}
