//! Top navigation bar with auth-aware actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::paths;
use crate::state::session::Session;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let user_name = move || session.with(|s| s.current_user().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <nav class="navbar navbar-expand bg-body-tertiary mb-4">
            <div class="container">
                <a class="navbar-brand" href=paths::ROOT>"MyWebsite"</a>
                <div class="navbar-nav ms-auto align-items-center">
                    <Show
                        when=move || session.with(Session::is_authenticated)
                        fallback=|| {
                            view! {
                                <a class="nav-link" href=paths::LOGIN>"Log in"</a>
                                <a class="nav-link" href=paths::SIGNUP>"Sign up"</a>
                            }
                        }
                    >
                        <a class="nav-link" href=paths::HOME>"Home"</a>
                        <span class="nav-user">
                            <i class="bi bi-person-circle"></i>
                            " "
                            {user_name}
                        </span>
                        <LogoutButton/>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

/// Clears the session, then navigates to wherever `Session::logout` points.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        if let Some(dest) = session.try_update(Session::logout) {
            navigate(dest, NavigateOptions::default());
        }
    };

    view! {
        <button class="btn btn-outline-secondary btn-sm" type="button" on:click=on_logout>
            "Log out"
        </button>
    }
}
