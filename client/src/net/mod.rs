//! Networking modules for the authentication endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login POST and maps responses to outcomes, and `types`
//! defines the JSON wire schema.

pub mod api;
pub mod types;
