//! Top-level routed pages.

pub mod campaigns;
pub mod login;
pub mod notifications;
