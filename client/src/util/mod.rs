//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold decisions that components apply, kept free of the
//! reactive runtime so they can be unit tested directly.

pub mod route_guard;
