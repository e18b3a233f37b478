//! Network layer: wire types and REST calls to the remote services.

pub mod api;
pub mod types;
