//! Case-insensitive substring search across each record's indexed fields.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::data::records::{BlogPost, Bookmark, Following, HistoryItem, SavedBlog};

/// A record that can be matched against a search term.
pub trait Searchable {
    /// Text fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for HistoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }
}

impl Searchable for Bookmark {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.author.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Searchable for SavedBlog {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str(), self.category.as_str()]
    }
}

impl Searchable for Following {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.username.as_str()]
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str(), self.author.as_str()]
    }
}

/// Normalized form of a search box value. `None` means "match everything".
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_lowercase()) }
}

/// Whether any indexed field of `item` contains `term`, ignoring case.
pub fn matches_term<T: Searchable>(item: &T, term: &str) -> bool {
    match normalize_term(term) {
        None => true,
        Some(needle) => item
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle)),
    }
}

/// Records matching `term`, in their input order.
pub fn filter_by_term<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    items.iter().filter(|item| matches_term(*item, term)).cloned().collect()
}

/// What a list page should render for its current filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    /// At least one row is visible.
    Populated,
    /// The collection has rows but none match the filter.
    NoMatches,
    /// The collection itself is empty.
    Empty,
}

pub fn list_status(total: usize, visible: usize) -> ListStatus {
    if total == 0 {
        ListStatus::Empty
    } else if visible == 0 {
        ListStatus::NoMatches
    } else {
        ListStatus::Populated
    }
}

/// Drop the record with `id`.
pub fn remove_by_id<T>(items: &mut Vec<T>, id: u32, id_of: impl Fn(&T) -> u32) {
    items.retain(|item| id_of(item) != id);
}
