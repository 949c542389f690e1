//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own interactive behavior; pages only arrange them.

pub mod login_form;
