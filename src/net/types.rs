//! Wire types shared between the REST layer and the state models.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A single email-blast campaign record as served by the campaign service.
///
/// The schema is declared statically: table headers and edit-dialog fields
/// come from [`Campaign::COLUMNS`], never from the runtime shape of a
/// response object.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub date: String,
    pub subject: String,
    pub to: Vec<String>,
    pub body: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub status: String,
}

/// Response envelope for `GET <campaigns endpoint>`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct CampaignListResponse {
    pub data: Vec<Campaign>,
}

/// Columns of the campaign table, in declared render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Date,
    Subject,
    To,
    Body,
    Attachments,
    Status,
}

/// How a column behaves in the edit dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Rendered but never editable (`id`, `status`).
    ReadOnly,
    /// Plain text field.
    Text,
    /// List-valued field edited as comma-separated text.
    List,
}

impl Column {
    /// Label used for table headers and edit-field labels.
    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Date => "date",
            Column::Subject => "subject",
            Column::To => "to",
            Column::Body => "body",
            Column::Attachments => "attachments",
            Column::Status => "status",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Column::Id | Column::Status => FieldKind::ReadOnly,
            Column::To | Column::Attachments => FieldKind::List,
            Column::Name | Column::Date | Column::Subject | Column::Body => FieldKind::Text,
        }
    }
}

impl Campaign {
    /// Declared column list driving the table and the edit dialog.
    pub const COLUMNS: [Column; 8] = [
        Column::Id,
        Column::Name,
        Column::Date,
        Column::Subject,
        Column::To,
        Column::Body,
        Column::Attachments,
        Column::Status,
    ];

    /// Cell text for one column: list-valued fields are comma-joined,
    /// everything else is rendered verbatim.
    pub fn display(&self, column: Column) -> String {
        match column {
            Column::Id => self.id.clone(),
            Column::Name => self.name.clone(),
            Column::Date => self.date.clone(),
            Column::Subject => self.subject.clone(),
            Column::To => self.to.join(", "),
            Column::Body => self.body.clone(),
            Column::Attachments => self.attachments.join(", "),
            Column::Status => self.status.clone(),
        }
    }
}

/// Severity marker on a notification from the alerts service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
    Error,
}

/// A single alert row from the notifications drawer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub campaign_name: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub read: bool,
}
