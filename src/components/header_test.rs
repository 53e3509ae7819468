use super::*;

#[test]
fn blank_search_goes_to_all_blogs() {
    assert_eq!(search_href("   "), "/blogs");
}

#[test]
fn search_term_is_trimmed_and_encoded() {
    assert_eq!(search_href(" rust "), "/blogs?q=rust");
    assert_eq!(search_href("node.js & css"), "/blogs?q=node.js+%26+css");
    assert_eq!(search_href("c#"), "/blogs?q=c%23");
}
