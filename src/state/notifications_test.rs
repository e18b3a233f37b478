use super::*;
use crate::net::types::NotificationKind;

fn alert(id: &str, read: bool) -> Notification {
    Notification {
        id: id.to_owned(),
        message: "Bounce rate high".to_owned(),
        kind: NotificationKind::Warning,
        campaign_name: "Spring launch".to_owned(),
        updated_at: "2025-04-02T10:00:00Z".to_owned(),
        read,
    }
}

#[test]
fn load_replaces_items_and_clears_loading() {
    let mut state = NotificationsState::default();
    state.load_started();
    assert!(state.loading);

    state.load_succeeded(vec![alert("a-1", false), alert("a-2", true)]);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn mark_read_flips_exactly_one_item() {
    let mut state = NotificationsState::default();
    state.load_succeeded(vec![alert("a-1", false), alert("a-2", false)]);

    state.mark_read("a-2");
    assert!(!state.items[0].read);
    assert!(state.items[1].read);

    // Unknown id: no-op.
    state.mark_read("a-9");
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn unread_count_tracks_read_flags() {
    let mut state = NotificationsState::default();
    assert_eq!(state.unread_count(), 0);

    state.load_succeeded(vec![alert("a-1", false), alert("a-2", true), alert("a-3", false)]);
    assert_eq!(state.unread_count(), 2);

    state.mark_read("a-1");
    state.mark_read("a-3");
    assert_eq!(state.unread_count(), 0);
}
