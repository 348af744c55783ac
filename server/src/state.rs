//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Everything in it is immutable after startup: configuration, the operator
//! account, the token signer, and the backend client. There are no locks on
//! the request path.

use std::sync::Arc;

use time::Duration;

use crate::config::Config;
use crate::services::backend::BackendApi;
use crate::services::credentials::AdminAccount;
use crate::services::session::TokenSigner;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub admin: Arc<AdminAccount>,
    pub signer: Arc<TokenSigner>,
    pub backend: Arc<dyn BackendApi>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, backend: Arc<dyn BackendApi>) -> Self {
        let admin = AdminAccount::new(&config.admin_username, &config.admin_password);
        let signer = TokenSigner::new(&config.session.secret, Duration::days(config.session.max_age_days));
        Self { config: Arc::new(config), admin: Arc::new(admin), signer: Arc::new(signer), backend }
    }

    /// Whether session cookies carry the `Secure` attribute.
    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.config.session.cookie_secure
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
