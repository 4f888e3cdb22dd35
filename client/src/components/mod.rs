//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `RwSignal<Session>` from Leptos
//! context. They must be mounted inside the `<Router>` set up by `app::App`.

pub mod devtools;
pub mod nav_bar;
pub mod route_guard;
