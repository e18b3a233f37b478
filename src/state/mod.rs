//! Shared client-side state models.
//!
//! DESIGN
//! ======
//! Each domain gets a plain struct or enum with explicit mutation entry
//! points; components hold them in `RwSignal` contexts and call the entry
//! points from their handlers. Keeping the logic off the reactive layer lets
//! the state machines run under plain `cargo test` on the native target.

pub mod campaigns;
pub mod delete;
pub mod editor;
pub mod notice;
pub mod notifications;
