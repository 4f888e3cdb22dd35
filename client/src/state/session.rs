//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` owns one `RwSignal<Session>` and provides it through
//! context. The route guard reads it, the login/signup forms and the logout
//! button mutate it.
//!
//! DESIGN
//! ======
//! Mutators only change state and return the path the caller should visit
//! next. Navigation stays with the caller, so the session can be driven
//! without a router. Nothing is verified: any non-empty credentials succeed
//! and the session lives only as long as the page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::paths;

/// Display name given to users who log in, since there is no user registry.
pub const DUMMY_USER_NAME: &str = "Dummy User";

/// Display attributes of the authenticated user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

/// Reason a login or signup was rejected.
///
/// The message is shown as-is under the submitted form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Enter your name.")]
    MissingName,
    #[error("Enter your email.")]
    MissingEmail,
    #[error("Enter your password.")]
    MissingPassword,
}

/// In-memory authentication state.
///
/// Authentication is derived from the presence of a user, so a session can
/// never be authenticated without one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Authenticate as a placeholder user carrying `email`.
    ///
    /// Returns the path to navigate to on success. On error the session is
    /// left exactly as it was.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&'static str, SessionError> {
        require(email, SessionError::MissingEmail)?;
        require(password, SessionError::MissingPassword)?;

        self.user = Some(SessionUser { name: DUMMY_USER_NAME.to_owned(), email: email.to_owned() });
        log::info!("session authenticated via login");
        Ok(paths::HOME)
    }

    /// Authenticate as a new user with the given display attributes.
    ///
    /// Fields are checked in form order: name, email, password.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<&'static str, SessionError> {
        require(name, SessionError::MissingName)?;
        require(email, SessionError::MissingEmail)?;
        require(password, SessionError::MissingPassword)?;

        self.user = Some(SessionUser { name: name.to_owned(), email: email.to_owned() });
        log::info!("session authenticated via signup");
        Ok(paths::HOME)
    }

    /// Drop the current user. Safe to call on an already-empty session.
    pub fn logout(&mut self) -> &'static str {
        if self.user.take().is_some() {
            log::info!("session cleared");
        }
        paths::ROOT
    }
}

fn require(value: &str, missing: SessionError) -> Result<(), SessionError> {
    if value.is_empty() { Err(missing) } else { Ok(()) }
}
