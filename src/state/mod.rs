//! Shared in-memory state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is read by route guards and user-aware components; `toast` backs
//! the transient notification surface. Both are plain value types so they
//! stay testable off-browser.

pub mod auth;
pub mod toast;
