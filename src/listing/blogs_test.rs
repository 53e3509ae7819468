use super::*;
use crate::data::seed;
use time::macros::datetime;

fn feed() -> Vec<BlogPost> {
    seed::generate_blogs(1, 24, datetime!(2024-02-01 12:00 UTC))
}

#[test]
fn default_query_keeps_everything_latest_first() {
    let posts = feed();
    let visible = BlogQuery::default().apply(&posts);
    assert_eq!(visible.len(), posts.len());
    assert!(visible.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn oldest_reverses_date_order() {
    let query = BlogQuery { sort: SortOrder::Oldest, ..BlogQuery::default() };
    let visible = query.apply(&feed());
    assert!(visible.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn counter_sorts_are_descending() {
    let posts = feed();
    let liked = BlogQuery { sort: SortOrder::MostLiked, ..BlogQuery::default() }.apply(&posts);
    assert!(liked.windows(2).all(|w| w[0].likes >= w[1].likes));
    let viewed = BlogQuery { sort: SortOrder::MostViewed, ..BlogQuery::default() }.apply(&posts);
    assert!(viewed.windows(2).all(|w| w[0].views >= w[1].views));
    let commented = BlogQuery { sort: SortOrder::MostCommented, ..BlogQuery::default() }.apply(&posts);
    assert!(commented.windows(2).all(|w| w[0].comments >= w[1].comments));
}

#[test]
fn category_and_tag_filters_combine() {
    let posts = feed();
    let category = posts[0].category.clone();
    let tag = posts[0].tags[0].clone();
    let query = BlogQuery {
        category: category.clone(),
        tag: tag.clone(),
        ..BlogQuery::default()
    };
    let visible = query.apply(&posts);
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|p| p.category == category && p.tags.contains(&tag)));
}

#[test]
fn search_matches_title_excerpt_or_author() {
    let posts = feed();
    let query = BlogQuery { term: "BLOG POST 7:".to_owned(), ..BlogQuery::default() };
    let visible = query.apply(&posts);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 7);

    let by_author = BlogQuery { term: posts[3].author.clone(), ..BlogQuery::default() }.apply(&posts);
    assert!(by_author.iter().any(|p| p.id == posts[3].id));
}

#[test]
fn sort_order_round_trips_select_values() {
    for order in SortOrder::ALL {
        assert_eq!(SortOrder::from_value(order.value()), order);
    }
    assert_eq!(SortOrder::from_value("bogus"), SortOrder::Latest);
}

#[test]
fn toggle_like_adjusts_counter_both_ways() {
    let mut posts = feed();
    let mut liked = BTreeSet::new();
    let before = posts[0].likes;
    let id = posts[0].id;

    assert!(toggle_like(&mut posts, &mut liked, id));
    assert_eq!(posts[0].likes, before + 1);
    assert!(liked.contains(&id));

    assert!(!toggle_like(&mut posts, &mut liked, id));
    assert_eq!(posts[0].likes, before);
    assert!(liked.is_empty());
}

#[test]
fn next_page_start_stops_at_cap() {
    assert_eq!(next_page_start(12, 12, 60), Some(13));
    assert_eq!(next_page_start(48, 12, 60), Some(49));
    assert_eq!(next_page_start(60, 12, 60), None);
}

#[test]
fn post_ids_parse_only_from_numbers() {
    assert_eq!(parse_post_id(Some("7".to_owned())), Some(7));
    assert_eq!(parse_post_id(Some("abc".to_owned())), None);
    assert_eq!(parse_post_id(Some(String::new())), None);
    assert_eq!(parse_post_id(None), None);
}

#[test]
fn near_bottom_triggers_inside_the_margin() {
    // 800px viewport over a 3000px page.
    assert!(!near_bottom(800, 1_000, 3_000, 200));
    assert!(near_bottom(800, 2_000, 3_000, 200));
    assert!(near_bottom(800, 2_200, 3_000, 0));
    assert!(!near_bottom(800, 2_199, 3_000, 0));
}

#[test]
fn short_pages_count_as_scrolled_to_the_end() {
    assert!(near_bottom(800, 0, 600, 0));
}
