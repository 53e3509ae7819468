use super::*;

#[test]
fn push_assigns_unique_ids() {
    let mut toasts = ToastState::default();
    let a = toasts.push("Saved", "");
    let b = toasts.push("Saved", "");
    assert_ne!(a, b);
    assert_eq!(toasts.items.len(), 2);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut toasts = ToastState::default();
    let a = toasts.push("One", "first");
    let b = toasts.push("Two", "second");
    toasts.dismiss(&a);
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, b);
    toasts.dismiss("missing");
    assert_eq!(toasts.items.len(), 1);
}

#[test]
fn oldest_toasts_are_dropped_past_the_limit() {
    let mut toasts = ToastState::default();
    for i in 0..5 {
        toasts.push(&format!("t{i}"), "");
    }
    let titles: Vec<_> = toasts.items.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["t2", "t3", "t4"]);
}
