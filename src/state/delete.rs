#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;

/// Delete-confirmation state machine:
/// `Closed -> Confirming -> (Deleting -> Closed) | Closed on cancel`.
///
/// A failed DELETE returns to `Confirming`, leaving the dialog open; the
/// failure itself is reported on the page-level error channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Closed,
    Confirming {
        id: String,
    },
    Deleting {
        id: String,
    },
}

impl DeleteState {
    pub fn request(&mut self, id: &str) {
        *self = DeleteState::Confirming { id: id.to_owned() };
    }

    pub fn cancel(&mut self) {
        *self = DeleteState::Closed;
    }

    pub fn close(&mut self) {
        *self = DeleteState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DeleteState::Closed)
    }

    /// Confirmed: move to `Deleting` and hand back the target id for the
    /// DELETE request. Returns `None` unless a confirmation is pending.
    pub fn begin_delete(&mut self) -> Option<String> {
        let DeleteState::Confirming { id } = &*self else {
            return None;
        };
        let id = id.clone();
        *self = DeleteState::Deleting { id: id.clone() };
        Some(id)
    }

    /// Failed DELETE: back to `Confirming`, dialog stays open.
    pub fn delete_failed(&mut self) {
        if let DeleteState::Deleting { id } = &*self {
            let id = id.clone();
            *self = DeleteState::Confirming { id };
        }
    }
}
