use super::*;

fn campaign() -> Campaign {
    Campaign {
        id: "c-1".to_owned(),
        name: "Spring launch".to_owned(),
        date: "2025-04-01".to_owned(),
        subject: "New arrivals".to_owned(),
        to: vec!["a@x.com".to_owned(), "b@x.com".to_owned()],
        body: "Hello".to_owned(),
        attachments: vec!["f1.pdf".to_owned()],
        status: "draft".to_owned(),
    }
}

#[test]
fn columns_cover_every_field_in_declared_order() {
    let labels: Vec<&str> = Campaign::COLUMNS.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        ["id", "name", "date", "subject", "to", "body", "attachments", "status"]
    );
}

#[test]
fn id_and_status_are_read_only() {
    assert_eq!(Column::Id.kind(), FieldKind::ReadOnly);
    assert_eq!(Column::Status.kind(), FieldKind::ReadOnly);
    assert_eq!(Column::Name.kind(), FieldKind::Text);
    assert_eq!(Column::To.kind(), FieldKind::List);
    assert_eq!(Column::Attachments.kind(), FieldKind::List);
}

#[test]
fn display_joins_list_fields_with_comma() {
    let c = campaign();
    assert_eq!(c.display(Column::To), "a@x.com, b@x.com");
    assert_eq!(c.display(Column::Attachments), "f1.pdf");
    assert_eq!(c.display(Column::Subject), "New arrivals");
}

#[test]
fn campaign_deserializes_with_missing_optional_fields() {
    let json = serde_json::json!({
        "id": "c-9",
        "name": "n",
        "date": "d",
        "subject": "s",
        "to": ["x@y.z"],
        "body": "b"
    });
    let c: Campaign = serde_json::from_value(json).expect("campaign");
    assert!(c.attachments.is_empty());
    assert!(c.status.is_empty());
}

#[test]
fn list_response_unwraps_data_envelope() {
    let json = serde_json::json!({ "data": [serde_json::to_value(campaign()).unwrap()] });
    let resp: CampaignListResponse = serde_json::from_value(json).expect("list");
    assert_eq!(resp.data.len(), 1);
    assert_eq!(resp.data[0].id, "c-1");
}

#[test]
fn notification_kind_parses_lowercase_type_tag() {
    let json = serde_json::json!({
        "id": "a-1",
        "message": "Bounce rate high",
        "type": "warning",
        "campaign_name": "Spring launch",
        "updated_at": "2025-04-02T10:00:00Z"
    });
    let n: Notification = serde_json::from_value(json).expect("notification");
    assert_eq!(n.kind, NotificationKind::Warning);
    assert!(!n.read);
}
