//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{devtools::DevtoolsPanel, nav_bar::NavBar, route_guard::RouteGuard};
use crate::config::AppConfig;
use crate::pages::{
    home::HomePage, index::IndexPage, login::LoginPage, not_found::NotFoundPage, settings::SettingsPage,
    signup::SignupPage,
};
use crate::state::session::Session;

/// Config provided by the host, or the compiled-in defaults in the browser.
fn app_config() -> Arc<AppConfig> {
    use_context::<Arc<AppConfig>>().unwrap_or_else(|| Arc::new(AppConfig::default()))
}

/// HTML shell rendered on the server for SSR + hydration.
///
/// Head tags come from `AppConfig::head` and `AppConfig::css`. The route
/// guard may set a redirect while `<App/>` renders; the server turns it into
/// a `302`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = app_config();

    let meta = config
        .head
        .meta
        .iter()
        .map(|tag| view! { <meta name=tag.name.clone() content=tag.content.clone()/> })
        .collect_view();
    let links = config
        .head
        .links
        .iter()
        .map(|tag| {
            view! {
                <link
                    rel=tag.rel.clone()
                    href=tag.href.clone()
                    integrity=tag.integrity.clone()
                    crossorigin=tag.crossorigin.clone()
                    type=tag.mime_type.clone()
                />
            }
        })
        .collect_view();
    let scripts = config
        .head
        .scripts
        .iter()
        .map(|tag| {
            view! {
                <script
                    src=tag.src.clone()
                    integrity=tag.integrity.clone()
                    crossorigin=tag.crossorigin.clone()
                    defer=true
                ></script>
            }
        })
        .collect_view();
    let stylesheets =
        config.css.iter().map(|href| view! { <link rel="stylesheet" href=href.clone()/> }).collect_view();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                {meta}
                {links}
                {stylesheets}
                {scripts}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session for the lifetime of the page and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = app_config();
    let session = RwSignal::new(Session::new());
    let devtools = config.devtools_enabled;
    let title = config.head.title.clone();

    provide_context(session);
    provide_context(config);

    view! {
        <Title text=title/>

        <Router>
            <NavBar/>
            <RouteGuard/>
            <main class="container">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=IndexPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=(StaticSegment("home"), StaticSegment("settings")) view=SettingsPage/>
                </Routes>
            </main>
            <Show when=move || devtools>
                <DevtoolsPanel/>
            </Show>
        </Router>
    }
}
