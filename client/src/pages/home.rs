//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable only with a session; `RouteGuard` sends anonymous visitors to
//! `/login` before this renders in the browser.

use leptos::prelude::*;

use crate::components::nav_bar::LogoutButton;
use crate::paths;
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let greeting = move || {
        session.with(|s| match s.current_user() {
            Some(user) => format!("Welcome, {}!", user.name),
            None => "Welcome!".to_owned(),
        })
    };

    view! {
        <section class="py-4">
            <h1 class="h3">{greeting}</h1>
            <p class="text-muted">"You are signed in."</p>
            <div class="d-flex gap-2">
                <a class="btn btn-outline-primary" href=paths::HOME_SETTINGS>
                    <i class="bi bi-gear"></i>
                    " Account"
                </a>
                <LogoutButton/>
            </div>
        </section>
    }
}
