use tracing::info;

use crate::login::dto::Credentials;

/// Where the front end should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Nutshells,
}

impl Navigation {
    pub fn path(self) -> &'static str {
        match self {
            Navigation::Nutshells => "/nutshells",
        }
    }
}

/// Receives navigation requests from the login form.
pub trait Navigator {
    fn go(&self, nav: Navigation);
}

impl Credentials {
    /// True when either field is blank after trimming.
    pub fn is_invalid(&self) -> bool {
        self.email.trim().is_empty() || self.password.trim().is_empty()
    }

    /// Records the login attempt and sends `navigator` to the contacts view.
    ///
    /// Nothing is checked against a user store, and `is_invalid` is not
    /// consulted: callers gate the submit action themselves.
    pub fn submit(&self, navigator: &impl Navigator) {
        info!(email = %self.email, "login");
        navigator.go(Navigation::Nutshells);
    }
}
