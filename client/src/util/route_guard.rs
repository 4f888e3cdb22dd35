//! Navigation guard rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated by `components::route_guard::RouteGuard` for every location the
//! router lands on, both during SSR and in the browser.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::paths;
use crate::state::session::Session;

/// Outcome of checking a destination against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed unchanged.
    Allow,
    /// Replace the navigation with one to the given path.
    Redirect(&'static str),
}

/// Decide whether `path` may be shown for `session`.
///
/// Rules, first match wins:
/// 1. anything under `/home` needs a session, otherwise go to `/login`;
/// 2. `/login` and `/signup` (exact) send an authenticated user to `/home`.
///
/// All other paths pass through whatever the session state.
pub fn evaluate(path: &str, session: &Session) -> GuardDecision {
    let authenticated = session.is_authenticated();

    if path.starts_with(paths::HOME) && !authenticated {
        return GuardDecision::Redirect(paths::LOGIN);
    }

    if (path == paths::LOGIN || path == paths::SIGNUP) && authenticated {
        return GuardDecision::Redirect(paths::HOME);
    }

    GuardDecision::Allow
}
