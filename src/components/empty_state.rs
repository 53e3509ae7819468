//! Placeholder shown when a list has nothing to display.

use leptos::prelude::*;

use crate::listing::search::ListStatus;

/// Message block for the "no matches" and "empty" list statuses.
#[component]
pub fn EmptyState(
    status: ListStatus,
    #[prop(into)] empty_title: String,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    let (title, message) = match status {
        ListStatus::NoMatches => ("No results found".to_owned(), "Try adjusting your search terms.".to_owned()),
        ListStatus::Empty | ListStatus::Populated => (empty_title, empty_message),
    };
    view! {
        <div class="empty-state">
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__message">{message}</p>
        </div>
    }
}
