use leptos::prelude::*;

use crate::paths;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="py-5 text-center">
            <h1>"Page not found."</h1>
            <a href=paths::ROOT>"Back to start"</a>
        </section>
    }
}
