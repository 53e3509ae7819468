//! Totals for the profile dashboard.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::data::records::BlogPost;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PostStats {
    pub posts: usize,
    pub likes: u64,
    pub views: u64,
    pub comments: u64,
}

impl PostStats {
    pub fn from_posts(posts: &[BlogPost]) -> Self {
        posts.iter().fold(Self { posts: posts.len(), ..Self::default() }, |acc, p| Self {
            likes: acc.likes + u64::from(p.likes),
            views: acc.views + u64::from(p.views),
            comments: acc.comments + u64::from(p.comments),
            ..acc
        })
    }
}

/// Compact counter label: `1840` -> `"1.8K"`. Values that would round up to
/// `1000.0K` are shown in the next unit.
pub fn compact_count(n: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = n as f64;
    let thousands = (value / 100.0).round() / 10.0;
    if thousands >= 1_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{thousands:.1}K")
    } else {
        n.to_string()
    }
}
