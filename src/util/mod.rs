//! Browser-environment helpers.

pub mod auth_token;
