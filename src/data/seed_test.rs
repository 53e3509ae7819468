use super::*;
use std::collections::HashSet;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2024-02-01 12:00 UTC);

#[test]
fn generate_blogs_numbers_ids_from_start() {
    let posts = generate_blogs(13, 12, NOW);
    let ids: Vec<u32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, (13..25).collect::<Vec<_>>());
}

#[test]
fn generate_blogs_is_deterministic_per_start() {
    assert_eq!(generate_blogs(1, 12, NOW), generate_blogs(1, 12, NOW));
}

#[test]
fn generate_blogs_stays_within_documented_ranges() {
    for post in generate_blogs(1, 48, NOW) {
        assert!((1..=3).contains(&post.tags.len()), "tags: {:?}", post.tags);
        assert!(CATEGORIES.contains(&post.category.as_str()));
        assert!((10..210).contains(&post.likes));
        assert!((5..20).contains(&post.read_time_minutes));
        let date = OffsetDateTime::parse(&post.date, &Rfc3339).expect("date should be RFC 3339");
        assert!(date <= NOW && date > NOW - Duration::days(30));
        let unique: HashSet<&String> = post.tags.iter().collect();
        assert_eq!(unique.len(), post.tags.len());
    }
}

#[test]
fn seeded_lists_have_unique_ids() {
    let ids: HashSet<u32> = history().iter().map(|h| h.id).collect();
    assert_eq!(ids.len(), history().len());
    let ids: HashSet<u32> = bookmarks().iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), bookmarks().len());
}

#[test]
fn followings_start_followed() {
    assert!(followings().iter().all(|f| f.following));
}

#[test]
fn profile_defaults_to_demo_email() {
    assert_eq!(profile("").email, DEMO_EMAIL);
    assert_eq!(profile("jane@example.com").email, "jane@example.com");
}

#[test]
fn editable_article_keeps_requested_id() {
    let article = editable_article(42);
    assert_eq!(article.id, 42);
    assert!(article.content.starts_with("# Getting Started"));
}
