use super::*;

#[test]
fn blog_post_uses_camel_case_keys() {
    let json = serde_json::json!({
        "id": 7,
        "title": "T",
        "excerpt": "E",
        "author": "A",
        "date": "2024-01-15T00:00:00Z",
        "readTimeMinutes": 5,
        "thumbnail": "/placeholder.svg",
        "likes": 1,
        "comments": 2,
        "views": 3,
        "tags": ["React"],
        "category": "Design"
    });
    let post: BlogPost = serde_json::from_value(json).expect("blog post should parse");
    assert_eq!(post.id, 7);
    assert_eq!(post.read_time_minutes, 5);
    assert_eq!(post.tags, vec!["React".to_owned()]);
}

#[test]
fn notification_kind_is_serialized_as_type() {
    let note = Notification {
        id: "1".to_owned(),
        title: "New Follower".to_owned(),
        message: "John Doe started following you.".to_owned(),
        is_read: false,
        timestamp: "5 hours ago".to_owned(),
        kind: NotificationKind::Success,
    };
    let value = serde_json::to_value(&note).expect("notification should serialize");
    assert_eq!(value["type"], "success");
    assert_eq!(value["isRead"], false);
}

#[test]
fn toggle_follow_moves_follower_count() {
    let mut author = Following {
        id: 1,
        name: "Sarah Chen".to_owned(),
        email: "sarah@example.com".to_owned(),
        username: "sarahchen".to_owned(),
        bio: String::new(),
        followers: 10,
        following: true,
        profile_image: None,
    };
    author.toggle_follow();
    assert!(!author.following);
    assert_eq!(author.followers, 9);
    author.toggle_follow();
    assert!(author.following);
    assert_eq!(author.followers, 10);
}
