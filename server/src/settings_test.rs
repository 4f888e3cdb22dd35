use super::*;

#[test]
fn listen_addr_defaults_to_3000() {
    assert_eq!(listen_addr(None).unwrap().port(), DEFAULT_PORT);
    assert_eq!(listen_addr(Some("  ")).unwrap().port(), DEFAULT_PORT);
}

#[test]
fn listen_addr_binds_all_interfaces() {
    assert!(listen_addr(None).unwrap().ip().is_unspecified());
}

#[test]
fn listen_addr_parses_override() {
    assert_eq!(listen_addr(Some("8080")).unwrap().port(), 8080);
    assert_eq!(listen_addr(Some(" 4100 ")).unwrap().port(), 4100);
}

#[test]
fn listen_addr_rejects_garbage() {
    let err = listen_addr(Some("http")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort(ref raw) if raw == "http"));
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn listen_addr_rejects_out_of_range() {
    assert!(matches!(listen_addr(Some("70000")), Err(ServerError::InvalidPort(_))));
}
