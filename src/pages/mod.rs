//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared concerns
//! (session, toasts, route protection) to `session`, `state`, and
//! `components`.

pub mod family;
pub mod home;
pub mod login;
pub mod profile;
pub mod verify_otp;
