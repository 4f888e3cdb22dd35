//! Application configuration record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds an `AppConfig` once at startup with `AppConfig::from_env`
//! and hands it to the SSR renderer through context. The browser bundle falls
//! back to `AppConfig::default`, which bakes in `PUBLIC_API_BASE` at compile
//! time. The session and route guard never read it.
//!
//! DESIGN
//! ======
//! Plain data. Head tags and stylesheets are rendered by `app::shell`; the
//! compression flag is applied by the server's static asset router.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const API_BASE_VAR: &str = "PUBLIC_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:4000";
pub const COMPATIBILITY_DATE: &str = "2025-07-15";

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/css/bootstrap.min.css";
const BOOTSTRAP_CSS_INTEGRITY: &str = "sha384-sRIl4kxILFvY47J16cr9ZwB07vP4J8+LH7qKQnuqkuIAvNWLzeN8tE5YBujZqJLB";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/js/bootstrap.bundle.min.js";
const BOOTSTRAP_JS_INTEGRITY: &str = "sha384-FKyoEForCGlyvwx9Hj09JcYn3nv7wiPVlz7YYwJrWVcXK/BmnVDxM+D2scQbITxI";
const BOOTSTRAP_ICONS_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

/// Errors produced while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidApiBase { var: &'static str, value: String },
}

/// Settings that are safe to expose to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicRuntimeConfig {
    /// Base URL for future API calls. No current page issues requests.
    pub api_base: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl MetaTag {
    fn new(name: &str, content: &str) -> Self {
        Self { name: name.to_owned(), content: content.to_owned() }
    }
}

/// A `<link>` element in the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossorigin: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl LinkTag {
    pub fn stylesheet(href: &str) -> Self {
        Self { rel: "stylesheet".to_owned(), href: href.to_owned(), integrity: None, crossorigin: None, mime_type: None }
    }

    /// Pin a third-party resource with subresource integrity. Sets
    /// `crossorigin=anonymous`, which the browser requires for the check.
    #[must_use]
    pub fn pinned(mut self, integrity: &str) -> Self {
        self.integrity = Some(integrity.to_owned());
        self.crossorigin = Some("anonymous".to_owned());
        self
    }

    pub fn icon(href: &str, mime_type: &str) -> Self {
        Self {
            rel: "icon".to_owned(),
            href: href.to_owned(),
            integrity: None,
            crossorigin: None,
            mime_type: Some(mime_type.to_owned()),
        }
    }
}

/// A deferred third-party `<script>`, pinned with subresource integrity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptTag {
    pub src: String,
    pub integrity: String,
    pub crossorigin: String,
}

impl ScriptTag {
    fn pinned(src: &str, integrity: &str) -> Self {
        Self { src: src.to_owned(), integrity: integrity.to_owned(), crossorigin: "anonymous".to_owned() }
    }
}

/// Document head metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadConfig {
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
    /// Browser-only plugins. They run after parse and never touch SSR output.
    pub scripts: Vec<ScriptTag>,
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            title: "MyWebsite".to_owned(),
            meta: vec![
                MetaTag::new("viewport", "width=device-width, initial-scale=1"),
                MetaTag::new("description", "Professional Web Application"),
            ],
            links: vec![
                LinkTag::stylesheet(BOOTSTRAP_CSS).pinned(BOOTSTRAP_CSS_INTEGRITY),
                LinkTag::stylesheet(BOOTSTRAP_ICONS_CSS),
                LinkTag::icon("/favicon.png", "image/png"),
            ],
            scripts: vec![ScriptTag::pinned(BOOTSTRAP_JS, BOOTSTRAP_JS_INTEGRITY)],
        }
    }
}

/// Build-time and runtime options for the hosting shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Follows the build profile so SSR and hydrated markup agree.
    pub devtools_enabled: bool,
    pub compatibility_date: String,
    pub public: PublicRuntimeConfig,
    pub head: HeadConfig,
    /// Application stylesheets, served from the public asset directory.
    pub css: Vec<String>,
    pub compress_public_assets: bool,
    /// Crates build with the pedantic clippy profile.
    pub strict: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_base = resolve_api_base(option_env!("PUBLIC_API_BASE")).unwrap_or_else(|e| {
            log::warn!("{e}; using {DEFAULT_API_BASE}");
            DEFAULT_API_BASE.to_owned()
        });
        Self::with_api_base(api_base)
    }
}

impl AppConfig {
    /// Build config from process environment variables.
    ///
    /// Optional:
    /// - `PUBLIC_API_BASE`: default `http://localhost:4000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = resolve_api_base(lookup(API_BASE_VAR).as_deref())?;
        Ok(Self::with_api_base(api_base))
    }

    fn with_api_base(api_base: String) -> Self {
        Self {
            devtools_enabled: cfg!(debug_assertions),
            compatibility_date: COMPATIBILITY_DATE.to_owned(),
            public: PublicRuntimeConfig { api_base },
            head: HeadConfig::default(),
            css: vec!["/assets/css/global.css".to_owned()],
            compress_public_assets: true,
            strict: true,
        }
    }
}

/// Normalize an API base override. Unset or blank values use the default.
pub fn resolve_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_API_BASE.to_owned());
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidApiBase { var: API_BASE_VAR, value: value.to_owned() });
    }
    Ok(value.trim_end_matches('/').to_owned())
}
