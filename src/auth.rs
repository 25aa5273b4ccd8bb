//! Auth
//!
//! Mock authentication: a logged-in flag, a login prompt overlay, and at
//! most one pending guarded-navigation target. Nothing is verified or
//! persisted; login always succeeds once the prompt is submitted.

use crate::navigation::Screen;

/// Mock session state.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    logged_in: bool,
    pending: Option<Screen>,
    prompt_open: bool,
}

impl AuthSession {
    /// Create a logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// The guarded navigation waiting on a successful login, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Screen> {
        self.pending
    }

    /// Whether the login overlay is open.
    #[must_use]
    pub fn is_prompt_open(&self) -> bool {
        self.prompt_open
    }

    /// Defer a guarded navigation until login succeeds and open the login
    /// prompt. A second guarded call before resolution overwrites the
    /// first: last guard wins.
    pub fn defer(&mut self, target: Screen) {
        self.pending = Some(target);
        self.prompt_open = true;
    }

    /// Mark the session logged in, close the prompt, and hand back the
    /// pending navigation target for the caller to resume.
    pub fn resolve(&mut self) -> Option<Screen> {
        self.logged_in = true;
        self.prompt_open = false;
        self.pending.take()
    }

    /// Close the login prompt without logging in, dropping any pending
    /// navigation.
    pub fn dismiss(&mut self) {
        self.prompt_open = false;
        self.pending = None;
    }

    /// Log the session out.
    pub fn logout(&mut self) {
        self.logged_in = false;
    }
}

/// Mock registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Display name.
    pub name: String,

    /// Email address. Not verified.
    pub email: String,

    /// Password. Not checked beyond presence.
    pub password: String,
}

impl RegistrationForm {
    /// Whether every field is filled in. Registration with an incomplete
    /// form surfaces a user-visible notice instead of logging in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.trim().is_empty()
    }
}
