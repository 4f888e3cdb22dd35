//! Public landing page.

use leptos::prelude::*;

use crate::paths;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <section class="py-5 text-center">
            <h1 class="display-5 fw-bold">"MyWebsite"</h1>
            <p class="lead text-muted">"Professional Web Application"</p>
            <div class="d-flex gap-2 justify-content-center">
                <a class="btn btn-primary" href=paths::LOGIN>"Log in"</a>
                <a class="btn btn-outline-primary" href=paths::SIGNUP>"Create account"</a>
            </div>
        </section>
    }
}
