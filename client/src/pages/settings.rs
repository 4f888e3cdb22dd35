//! Read-only account details for the signed-in user.

use leptos::prelude::*;

use crate::paths;
use crate::state::session::Session;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let name = move || session.with(|s| s.current_user().map(|u| u.name.clone()).unwrap_or_default());
    let email = move || session.with(|s| s.current_user().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <section class="py-4">
            <h1 class="h3">"Account"</h1>
            <dl class="row">
                <dt class="col-sm-3">"Name"</dt>
                <dd class="col-sm-9">{name}</dd>
                <dt class="col-sm-3">"Email"</dt>
                <dd class="col-sm-9">{email}</dd>
            </dl>
            <a href=paths::HOME>"Back"</a>
        </section>
    }
}
