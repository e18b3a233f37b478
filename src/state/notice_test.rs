use super::*;

#[test]
fn default_is_hidden_success() {
    let notice = NoticeState::default();
    assert!(!notice.visible);
    assert!(notice.message.is_empty());
    assert_eq!(notice.severity, Severity::Success);
}

#[test]
fn show_error_sets_all_three_fields() {
    let mut notice = NoticeState::default();
    notice.show_error("Failed to send campaign: boom");
    assert!(notice.visible);
    assert_eq!(notice.message, "Failed to send campaign: boom");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn dismiss_hides_but_keeps_the_last_message() {
    let mut notice = NoticeState::default();
    notice.show_success("Campaign updated successfully");
    notice.dismiss();
    assert!(!notice.visible);
    assert_eq!(notice.message, "Campaign updated successfully");
}

#[test]
fn next_show_overwrites_the_previous_message() {
    let mut notice = NoticeState::default();
    notice.show_success("first");
    notice.dismiss();
    notice.show_error("second");
    assert!(notice.visible);
    assert_eq!(notice.message, "second");
    assert_eq!(notice.severity, Severity::Error);
}
