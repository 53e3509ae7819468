use super::*;

#[test]
fn initial_uppercases_first_letter() {
    assert_eq!(initial("alice"), "A");
    assert_eq!(initial("  bob"), "B");
    assert_eq!(initial(""), "?");
}

#[test]
fn email_hash_matches_thirty_one_multiplier() {
    // "ab" = (97 * 31) + 98
    assert_eq!(email_hash("ab"), 3105);
    assert_eq!(email_hash(""), 0);
}

#[test]
fn email_hash_wraps_instead_of_overflowing() {
    let long = "someone.with.a.very.long.address@example.com".repeat(4);
    let _ = email_hash(&long);
}

#[test]
fn color_for_is_stable_and_from_palette() {
    let first = color_for("alice@example.com");
    assert_eq!(first, color_for("alice@example.com"));
    assert!(AVATAR_COLORS.contains(&first));
}

#[test]
fn display_name_from_email_capitalizes_parts() {
    assert_eq!(display_name_from_email("test@example.com"), "Test");
    assert_eq!(display_name_from_email("jane.doe@example.com"), "Jane Doe");
    assert_eq!(display_name_from_email("no_at_sign"), "No At Sign");
}

#[test]
fn avatar_size_default_is_medium() {
    assert_eq!(AvatarSize::default(), AvatarSize::Medium);
    assert_eq!(AvatarSize::Large.class(), "avatar avatar--lg");
}
