//! Router-level guard that applies `util::route_guard` to every navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside `<Router>`, outside `<Routes>`, so it also covers
//! paths that match no route (`/homepage`). During SSR a redirect becomes a
//! `302` with a `Location` header; in the browser it is a replacing client
//! navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::Session;
use crate::util::route_guard::{GuardDecision, evaluate};

/// Applies the guard once per render on the server, and on every location
/// change in the browser.
///
/// The session is read untracked. Login and logout handlers navigate
/// themselves right after mutating it, and that navigation is what the
/// guard checks.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();

    #[cfg(feature = "ssr")]
    {
        if let Some(to) = redirect_target(&location.pathname.get_untracked(), session) {
            leptos_axum::redirect(to);
        }
    }

    #[cfg(not(feature = "ssr"))]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        let navigate = use_navigate();
        Effect::new(move || {
            if let Some(to) = redirect_target(&location.pathname.get(), session) {
                navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    }
}

fn redirect_target(path: &str, session: RwSignal<Session>) -> Option<&'static str> {
    match session.with_untracked(|s| evaluate(path, s)) {
        GuardDecision::Allow => None,
        GuardDecision::Redirect(to) => {
            log::debug!("route guard redirect {path} -> {to}");
            Some(to)
        }
    }
}
