use super::*;

#[test]
fn failure_message_prefers_server_message_field() {
    let body = serde_json::json!({"message": "name must be unique"});
    assert_eq!(failure_message(422, Some(&body)), "name must be unique");
}

#[test]
fn failure_message_falls_back_to_status_line() {
    assert_eq!(failure_message(500, None), "HTTP error! status: 500");

    let body = serde_json::json!({"error": "not a message field"});
    assert_eq!(failure_message(404, Some(&body)), "HTTP error! status: 404");

    let body = serde_json::json!({"message": 42});
    assert_eq!(failure_message(400, Some(&body)), "HTTP error! status: 400");
}

#[test]
fn endpoints_default_to_same_origin_paths() {
    assert!(campaigns_endpoint().starts_with('/') || campaigns_endpoint().starts_with("http"));
    assert!(alerts_endpoint().starts_with('/') || alerts_endpoint().starts_with("http"));
}
