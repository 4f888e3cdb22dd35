//! Development overlay showing router and session state.
//!
//! Only mounted when `AppConfig::devtools_enabled` is set.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::AppConfig;
use crate::state::session::Session;

#[component]
pub fn DevtoolsPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<Arc<AppConfig>>();
    let location = use_location();

    let auth_label = move || if session.with(Session::is_authenticated) { "authenticated" } else { "anonymous" };
    let compatibility_date = config.compatibility_date.clone();

    view! {
        <aside class="devtools position-fixed bottom-0 end-0 m-2 p-2 small bg-dark text-light rounded">
            <div>"path: " {move || location.pathname.get()}</div>
            <div>"session: " {auth_label}</div>
            <div>"compat: " {compatibility_date}</div>
        </aside>
    }
}
