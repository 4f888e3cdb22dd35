//! Route paths shared by the router, the route guard, and the session.

/// Public landing page.
pub const ROOT: &str = "/";
/// Authenticated area. Every path under this prefix requires a session.
pub const HOME: &str = "/home";
/// Account details inside the authenticated area.
pub const HOME_SETTINGS: &str = "/home/settings";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
