//! Signup page. Creates the session user from the submitted name and email.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::paths;
use crate::state::session::Session;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();

        match session.try_update(|s| s.signup(&name_value, &email_value, &password_value)) {
            Some(Ok(dest)) => {
                info.set(String::new());
                navigate(dest, NavigateOptions::default());
            }
            Some(Err(e)) => info.set(e.to_string()),
            None => {}
        }
    };

    view! {
        <div class="card auth-card">
            <div class="card-body">
                <h1 class="h4 mb-3">"Create account"</h1>
                <form on:submit=on_submit>
                    <input
                        class="form-control mb-2"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="form-control mb-2"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form-control mb-3"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary w-100" type="submit">"Sign up"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="mt-3 mb-0 small">
                    "Already registered? "
                    <a href=paths::LOGIN>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
