//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and calls into `state::session`; redirects
//! between pages are left to `components::route_guard`.

pub mod home;
pub mod index;
pub mod login;
pub mod not_found;
pub mod settings;
pub mod signup;
