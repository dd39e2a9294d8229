use crate::error::Result as AuthResult;
use crate::remote::auth_api::AuthApi;
use crate::session::{resolution::Resolution, session_state::SessionState, surface::Surface};
use crate::store::credential_store::CredentialStore;

use std::sync::Arc;

use log::{debug, warn};

/// Decides whether the current page load is authenticated, and how.
pub struct SessionResolver {
    store: CredentialStore,
    api: Arc<dyn AuthApi>,
}

impl SessionResolver {
    pub fn new(store: CredentialStore, api: Arc<dyn AuthApi>) -> Self {
        Self { store, api }
    }

    /// Resolve the session for a page on `surface`.
    ///
    /// 1. A stored token is verified remotely. Success wins outright.
    ///    Any failure deletes the token (best effort) and falls through; it
    ///    never touches the session flags, since an outage is not a logout.
    /// 2. Local session flags authenticate without a token.
    /// 3. Otherwise the caller is unauthenticated.
    pub async fn resolve(&self, surface: Surface) -> AuthResult<Resolution> {
        if let Some(token) = self.store.token()? {
            match self.api.verify_profile(&token).await {
                Ok(()) => {
                    debug!("Session token verified");
                    return Ok(Resolution::new(SessionState::AuthenticatedRemote, surface));
                }
                Err(e) => {
                    warn!("Token verification failed or server unreachable: {e}");
                    if let Err(clear_error) = self.store.clear_token() {
                        warn!("Failed to remove rejected session token: {clear_error}");
                    }
                }
            }
        }

        // isAuthenticated without a readable currentUser counts as signed out
        // (flag invariant, DESIGN.md "Decisions on open questions").
        let state = if self.store.session_flags()?.is_signed_in() {
            SessionState::AuthenticatedLocal
        } else {
            SessionState::Unauthenticated
        };

        debug!("Session resolved as {state} on {surface} surface");
        Ok(Resolution::new(state, surface))
    }
}
