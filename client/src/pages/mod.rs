//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is one routed `Screen` and delegates rendering details to
//! `components`.

pub mod home;
pub mod login;
pub mod sign_up;
