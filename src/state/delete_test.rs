use super::*;

#[test]
fn request_opens_confirmation_for_that_id() {
    let mut state = DeleteState::default();
    assert!(!state.is_open());

    state.request("c-3");
    assert!(state.is_open());
    assert_eq!(state, DeleteState::Confirming { id: "c-3".to_owned() });
}

#[test]
fn cancel_closes_without_deleting() {
    let mut state = DeleteState::default();
    state.request("c-3");
    state.cancel();
    assert_eq!(state, DeleteState::Closed);
    assert_eq!(state.begin_delete(), None);
}

#[test]
fn begin_delete_hands_back_the_confirmed_id_once() {
    let mut state = DeleteState::default();
    state.request("c-3");

    assert_eq!(state.begin_delete().as_deref(), Some("c-3"));
    assert_eq!(state, DeleteState::Deleting { id: "c-3".to_owned() });

    // Already in flight: no second request.
    assert_eq!(state.begin_delete(), None);
}

#[test]
fn delete_failed_reopens_the_confirmation() {
    let mut state = DeleteState::default();
    state.request("c-3");
    state.begin_delete();

    state.delete_failed();
    assert_eq!(state, DeleteState::Confirming { id: "c-3".to_owned() });
}

#[test]
fn close_after_success_resets() {
    let mut state = DeleteState::default();
    state.request("c-3");
    state.begin_delete();
    state.close();
    assert_eq!(state, DeleteState::Closed);
}
