use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| vars.get(key).cloned()
}

// =============================================================
// from_lookup
// =============================================================

#[test]
fn from_lookup_defaults() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.public.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.compatibility_date, "2025-07-15");
    assert_eq!(cfg.devtools_enabled, cfg!(debug_assertions));
    assert_eq!(cfg.css, vec!["/assets/css/global.css".to_owned()]);
    assert!(cfg.compress_public_assets);
    assert!(cfg.strict);
}

#[test]
fn from_lookup_api_base_override_is_trimmed() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("PUBLIC_API_BASE", "  https://api.example.test/v1/  ")])).unwrap();
    assert_eq!(cfg.public.api_base, "https://api.example.test/v1");
}

#[test]
fn from_lookup_blank_api_base_falls_back() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("PUBLIC_API_BASE", "   ")])).unwrap();
    assert_eq!(cfg.public.api_base, DEFAULT_API_BASE);
}

#[test]
fn from_lookup_rejects_non_http_api_base() {
    let err = AppConfig::from_lookup(lookup_from(&[("PUBLIC_API_BASE", "localhost:4000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiBase { var: "PUBLIC_API_BASE", value: "localhost:4000".to_owned() });
    assert!(err.to_string().contains("PUBLIC_API_BASE"));
}

// =============================================================
// Head metadata
// =============================================================

#[test]
fn head_default_title_and_meta() {
    let head = HeadConfig::default();
    assert_eq!(head.title, "MyWebsite");
    assert_eq!(head.meta[0], MetaTag::new("viewport", "width=device-width, initial-scale=1"));
    assert_eq!(head.meta[1], MetaTag::new("description", "Professional Web Application"));
}

#[test]
fn head_pins_bootstrap_with_integrity() {
    let head = HeadConfig::default();
    let bootstrap = &head.links[0];
    assert_eq!(bootstrap.rel, "stylesheet");
    assert!(bootstrap.href.contains("bootstrap@5.3.8"));
    assert_eq!(bootstrap.integrity.as_deref(), Some(BOOTSTRAP_CSS_INTEGRITY));
    assert_eq!(bootstrap.crossorigin.as_deref(), Some("anonymous"));
}

#[test]
fn head_icons_stylesheet_is_unpinned() {
    let head = HeadConfig::default();
    assert!(head.links[1].href.contains("bootstrap-icons@1.11.3"));
    assert!(head.links[1].integrity.is_none());
}

#[test]
fn head_has_png_favicon() {
    let head = HeadConfig::default();
    let icon = head.links.iter().find(|l| l.rel == "icon").unwrap();
    assert_eq!(icon.href, "/favicon.png");
    assert_eq!(icon.mime_type.as_deref(), Some("image/png"));
}

#[test]
fn head_loads_pinned_bootstrap_bundle_script() {
    let head = HeadConfig::default();
    assert_eq!(head.scripts.len(), 1);
    let script = &head.scripts[0];
    assert!(script.src.contains("bootstrap@5.3.8"));
    assert!(script.src.ends_with("bootstrap.bundle.min.js"));
    assert_eq!(script.integrity, BOOTSTRAP_JS_INTEGRITY);
    assert_eq!(script.crossorigin, "anonymous");
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn public_config_serializes_api_base_only() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    let json = serde_json::to_value(&cfg.public).unwrap();
    assert_eq!(json, serde_json::json!({ "api_base": "http://localhost:4000" }));
}

#[test]
fn link_tag_serializes_type_and_skips_missing_attrs() {
    let json = serde_json::to_value(LinkTag::icon("/favicon.png", "image/png")).unwrap();
    assert_eq!(json, serde_json::json!({ "rel": "icon", "href": "/favicon.png", "type": "image/png" }));
}
