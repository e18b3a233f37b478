use super::*;

fn campaign(id: &str) -> Campaign {
    Campaign {
        id: id.to_owned(),
        name: format!("campaign {id}"),
        date: "2025-04-01".to_owned(),
        subject: "subject".to_owned(),
        to: vec!["a@x.com".to_owned()],
        body: "body".to_owned(),
        attachments: Vec::new(),
        status: "draft".to_owned(),
    }
}

fn loaded(n: usize) -> CampaignsState {
    let mut state = CampaignsState::default();
    state.load_succeeded((0..n).map(|i| campaign(&format!("c-{i}"))).collect());
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_starts_loading_with_five_rows() {
    let state = CampaignsState::default();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.rows_per_page, 5);
    assert_eq!(state.page, 0);
}

#[test]
fn load_succeeded_replaces_list_and_clears_flags() {
    let mut state = loaded(2);
    state.load_started();
    assert!(state.loading);

    state.load_succeeded(vec![campaign("x")]);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "x");
}

#[test]
fn load_failed_sets_error_and_leaves_list_empty() {
    let mut state = CampaignsState::default();
    state.load_failed("Failed to load campaigns. Please try again later.");
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to load campaigns. Please try again later.")
    );
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_slice_len_is_min_of_rows_and_remainder() {
    let mut state = loaded(12);

    // Full first page.
    assert_eq!(state.page_slice().len(), 5);

    // Partial last page: 12 - 2*5 = 2.
    state.set_page(2);
    assert_eq!(state.page_slice().len(), 2);
    assert_eq!(state.page_slice()[0].id, "c-10");

    // Past the end.
    state.set_page(3);
    assert!(state.page_slice().is_empty());
}

#[test]
fn page_slice_respects_rows_per_page() {
    let mut state = loaded(12);
    state.set_rows_per_page(10);
    assert_eq!(state.page_slice().len(), 10);
    state.set_page(1);
    assert_eq!(state.page_slice().len(), 2);
}

#[test]
fn set_rows_per_page_resets_page_to_zero() {
    let mut state = loaded(30);
    state.set_page(4);
    state.set_rows_per_page(25);
    assert_eq!(state.page, 0);
    assert_eq!(state.page_slice().len(), 25);
}

#[test]
fn page_count_rounds_up_and_is_never_zero() {
    assert_eq!(loaded(0).page_count(), 1);
    assert_eq!(loaded(5).page_count(), 1);
    assert_eq!(loaded(6).page_count(), 2);
    assert_eq!(loaded(12).page_count(), 3);
}

// =============================================================
// Optimistic mutation
// =============================================================

#[test]
fn apply_update_replaces_only_the_matching_record() {
    let mut state = loaded(3);
    let mut edited = campaign("c-1");
    edited.subject = "edited subject".to_owned();

    state.apply_update("c-1", edited.clone());

    assert_eq!(state.items[1], edited);
    assert_eq!(state.items[0], campaign("c-0"));
    assert_eq!(state.items[2], campaign("c-2"));
}

#[test]
fn apply_update_for_missing_id_is_a_no_op() {
    // Edit completing after a concurrent delete removed the record.
    let mut state = loaded(2);
    let before = state.items.clone();
    state.apply_update("c-9", campaign("c-9"));
    assert_eq!(state.items, before);
}

#[test]
fn refresh_tick_bumps_monotonically() {
    let mut tick = RefreshTick::default();
    tick.bump();
    tick.bump();
    assert_eq!(tick, RefreshTick(2));
}

#[test]
fn remove_drops_exactly_one_id() {
    let mut state = loaded(3);
    state.remove("c-1");
    let ids: Vec<&str> = state.items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c-0", "c-2"]);
}
