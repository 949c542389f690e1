//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is plain data wrapped in `RwSignal`s by the owning component, so the
//! transitions can be tested without a reactive runtime.

pub mod auth;
