use super::*;
use crate::data::seed;

#[test]
fn totals_over_seeded_posts() {
    let stats = PostStats::from_posts(&seed::my_posts());
    assert_eq!(stats, PostStats { posts: 3, likes: 289, views: 3920, comments: 46 });
}

#[test]
fn empty_post_list_is_all_zero() {
    assert_eq!(PostStats::from_posts(&[]), PostStats::default());
}

#[test]
fn compact_count_abbreviates_thousands() {
    assert_eq!(compact_count(870), "870");
    assert_eq!(compact_count(1_840), "1.8K");
    assert_eq!(compact_count(2_500_000), "2.5M");
}

#[test]
fn compact_count_rolls_over_to_millions_instead_of_1000k() {
    assert_eq!(compact_count(999_949), "999.9K");
    assert_eq!(compact_count(999_950), "1.0M");
    assert_eq!(compact_count(999_999), "1.0M");
    assert_eq!(compact_count(1_000_000), "1.0M");
}
