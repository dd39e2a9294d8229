use crate::error::Result as AuthResult;
use crate::remote::auth_api::AuthApi;
use crate::session::{
    resolution::Resolution, session_resolver::SessionResolver, session_state::SessionState,
    surface::Surface,
};
use crate::store::{credential_store::CredentialStore, current_user::CurrentUser};

use std::sync::Arc;

use log::info;

/// Per-page session context: initialized on page load, cleared on logout.
///
/// Holds the only cached resolution; nothing auth-related lives in globals.
pub struct SessionContext {
    store: CredentialStore,
    resolver: SessionResolver,
    resolution: Option<Resolution>,
}

impl SessionContext {
    pub fn new(store: CredentialStore, api: Arc<dyn AuthApi>) -> Self {
        let resolver = SessionResolver::new(store.clone(), api);
        Self {
            store,
            resolver,
            resolution: None,
        }
    }

    /// Resolve the session for the page being loaded and cache the result.
    pub async fn init_on_load(&mut self, surface: Surface) -> AuthResult<Resolution> {
        let resolution = self.resolver.resolve(surface).await?;
        self.resolution = Some(resolution);
        Ok(resolution)
    }

    /// Last resolution, if the page has been initialized.
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.resolution
            .map(|resolution| resolution.state)
            .unwrap_or(SessionState::Unauthenticated)
    }

    /// User snapshot from the session flags, when signed in.
    pub fn current_user(&self) -> AuthResult<Option<CurrentUser>> {
        let flags = self.store.session_flags()?;
        Ok(if flags.is_signed_in() {
            flags.current_user
        } else {
            None
        })
    }

    /// Clears persisted session state and the cached resolution.
    pub fn clear_on_logout(&mut self) -> AuthResult<()> {
        self.resolution = None;
        self.store.sign_out()?;
        info!("Signed out");
        Ok(())
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}
