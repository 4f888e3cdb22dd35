use super::*;

fn anonymous() -> Session {
    Session::new()
}

fn authenticated() -> Session {
    let mut session = Session::new();
    session.login("alice@example.com", "secret").unwrap();
    session
}

// =============================================================
// Protected prefix
// =============================================================

#[test]
fn home_subpath_without_session_redirects_to_login() {
    assert_eq!(evaluate("/home/dashboard", &anonymous()), GuardDecision::Redirect("/login"));
}

#[test]
fn home_without_session_redirects_to_login() {
    assert_eq!(evaluate("/home", &anonymous()), GuardDecision::Redirect("/login"));
    assert_eq!(evaluate("/home/settings", &anonymous()), GuardDecision::Redirect("/login"));
}

#[test]
fn home_with_session_is_allowed() {
    assert_eq!(evaluate("/home", &authenticated()), GuardDecision::Allow);
    assert_eq!(evaluate("/home/settings", &authenticated()), GuardDecision::Allow);
}

#[test]
fn home_prefix_is_a_plain_string_prefix() {
    assert_eq!(evaluate("/homepage", &anonymous()), GuardDecision::Redirect("/login"));
}

// =============================================================
// Public auth pages
// =============================================================

#[test]
fn login_with_session_redirects_home() {
    assert_eq!(evaluate("/login", &authenticated()), GuardDecision::Redirect("/home"));
}

#[test]
fn signup_with_session_redirects_home() {
    assert_eq!(evaluate("/signup", &authenticated()), GuardDecision::Redirect("/home"));
}

#[test]
fn auth_pages_without_session_are_allowed() {
    assert_eq!(evaluate("/login", &anonymous()), GuardDecision::Allow);
    assert_eq!(evaluate("/signup", &anonymous()), GuardDecision::Allow);
}

#[test]
fn auth_pages_match_exactly() {
    assert_eq!(evaluate("/login/help", &authenticated()), GuardDecision::Allow);
    assert_eq!(evaluate("/signup/", &authenticated()), GuardDecision::Allow);
}

// =============================================================
// Ungated paths
// =============================================================

#[test]
fn other_paths_pass_through_regardless_of_session() {
    for path in ["/", "/about", "/pricing/plans"] {
        assert_eq!(evaluate(path, &anonymous()), GuardDecision::Allow, "anonymous {path}");
        assert_eq!(evaluate(path, &authenticated()), GuardDecision::Allow, "authenticated {path}");
    }
}
