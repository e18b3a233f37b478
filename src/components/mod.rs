//! Reusable view components.

pub mod campaign_table;
pub mod delete_dialog;
pub mod edit_dialog;
pub mod notification_item;
pub mod snackbar;
