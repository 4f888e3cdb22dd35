//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain Rust values. Components wrap them in `RwSignal`
//! and share them through Leptos context, so the types themselves stay
//! testable without a reactive runtime.

pub mod session;
