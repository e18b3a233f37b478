#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays on screen before auto-dismissing.
pub const AUTO_DISMISS_MS: u64 = 6_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// Transient toast shared by the edit-success, edit-failure, launch-success
/// and launch-failure paths.
///
/// Dismissal clears `visible` only; the last message stays in memory until
/// the next `show_*` overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
}

impl NoticeState {
    pub fn show_success(&mut self, message: &str) {
        self.visible = true;
        self.message = message.to_owned();
        self.severity = Severity::Success;
    }

    pub fn show_error(&mut self, message: &str) {
        self.visible = true;
        self.message = message.to_owned();
        self.severity = Severity::Error;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
