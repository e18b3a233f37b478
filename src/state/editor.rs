#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::fmt;

use crate::net::types::{Campaign, Column, FieldKind};

/// Validation failure raised before an edit is submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// Save triggered with no record snapshot in the editor.
    NothingSelected,
    /// One of the required fields is empty.
    MissingField(Column),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::NothingSelected => write!(f, "No campaign selected for editing."),
            EditError::MissingField(column) => write!(f, "{} is required.", column.label()),
        }
    }
}

/// Transient textual form of a campaign while it sits in the edit dialog.
///
/// List-valued fields are held as comma-joined strings until normalization;
/// `id` and `status` are carried verbatim and never written to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignDraft {
    pub id: String,
    pub name: String,
    pub date: String,
    pub subject: String,
    pub to: String,
    pub body: String,
    pub attachments: String,
    pub status: String,
}

impl CampaignDraft {
    /// Snapshot a record into its editable form.
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id.clone(),
            name: campaign.name.clone(),
            date: campaign.date.clone(),
            subject: campaign.subject.clone(),
            to: campaign.to.join(", "),
            body: campaign.body.clone(),
            attachments: campaign.attachments.join(", "),
            status: campaign.status.clone(),
        }
    }

    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Id => &self.id,
            Column::Name => &self.name,
            Column::Date => &self.date,
            Column::Subject => &self.subject,
            Column::To => &self.to,
            Column::Body => &self.body,
            Column::Attachments => &self.attachments,
            Column::Status => &self.status,
        }
    }

    /// Write one field. Read-only columns are ignored.
    pub fn set_field(&mut self, column: Column, value: String) {
        match column {
            Column::Id | Column::Status => {}
            Column::Name => self.name = value,
            Column::Date => self.date = value,
            Column::Subject => self.subject = value,
            Column::To => self.to = value,
            Column::Body => self.body = value,
            Column::Attachments => self.attachments = value,
        }
    }

    /// Normalize the draft back into a canonical record.
    ///
    /// Comma-joined list fields are split, trimmed, and stripped of empty
    /// segments; then `name, date, subject, to, body` must each be non-empty.
    pub fn normalize(&self) -> Result<Campaign, EditError> {
        let to = split_list(&self.to);
        let attachments = split_list(&self.attachments);

        if self.name.is_empty() {
            return Err(EditError::MissingField(Column::Name));
        }
        if self.date.is_empty() {
            return Err(EditError::MissingField(Column::Date));
        }
        if self.subject.is_empty() {
            return Err(EditError::MissingField(Column::Subject));
        }
        if to.is_empty() {
            return Err(EditError::MissingField(Column::To));
        }
        if self.body.is_empty() {
            return Err(EditError::MissingField(Column::Body));
        }

        Ok(Campaign {
            id: self.id.clone(),
            name: self.name.clone(),
            date: self.date.clone(),
            subject: self.subject.clone(),
            to,
            body: self.body.clone(),
            attachments,
            status: self.status.clone(),
        })
    }
}

/// Split comma-separated text into trimmed, non-empty items.
fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Edit-dialog state machine:
/// `Closed -> Editing -> (Submitting -> Closed) | Closed on cancel`.
///
/// A failed submit returns to `Editing` with the draft intact, so the dialog
/// stays open for another attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Editing {
        original: Campaign,
        draft: CampaignDraft,
    },
    Submitting {
        original: Campaign,
        draft: CampaignDraft,
    },
}

impl EditorState {
    /// Open the dialog over a snapshot of the selected record.
    pub fn open(&mut self, campaign: &Campaign) {
        *self = EditorState::Editing {
            original: campaign.clone(),
            draft: CampaignDraft::from_campaign(campaign),
        };
    }

    pub fn cancel(&mut self) {
        *self = EditorState::Closed;
    }

    pub fn close(&mut self) {
        *self = EditorState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    /// Current draft text for one field, if the dialog is open.
    pub fn field(&self, column: Column) -> Option<String> {
        match self {
            EditorState::Closed => None,
            EditorState::Editing { draft, .. } | EditorState::Submitting { draft, .. } => {
                Some(draft.field(column).to_owned())
            }
        }
    }

    /// Write one draft field. Only valid while `Editing`; read-only columns
    /// and other states are ignored.
    pub fn set_field(&mut self, column: Column, value: String) {
        if column.kind() == FieldKind::ReadOnly {
            return;
        }
        if let EditorState::Editing { draft, .. } = self {
            draft.set_field(column, value);
        }
    }

    /// Validate the draft and move to `Submitting`.
    ///
    /// On success returns the target record id and the normalized payload for
    /// the PATCH request; validation failures leave the state untouched and
    /// no network call is made.
    pub fn begin_submit(&mut self) -> Result<(String, Campaign), EditError> {
        let EditorState::Editing { original, draft } = &*self else {
            return Err(EditError::NothingSelected);
        };

        let payload = draft.normalize()?;
        let id = original.id.clone();
        let next = EditorState::Submitting {
            original: original.clone(),
            draft: draft.clone(),
        };
        *self = next;
        Ok((id, payload))
    }

    /// Failed PATCH: back to `Editing` with the draft intact.
    pub fn submit_failed(&mut self) {
        if let EditorState::Submitting { original, draft } = &*self {
            let (original, draft) = (original.clone(), draft.clone());
            *self = EditorState::Editing { original, draft };
        }
    }
}
