//! Auth-session state for the signed-in operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the navigation bar to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Authentication state tracking the current operator and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// State while `/api/auth/me` is still in flight.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Display name for the navigation bar.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map(|u| u.name.clone()).unwrap_or_default()
    }
}
