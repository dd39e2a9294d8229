use crate::error::Result as CliResult;

use ft_auth::{
    AuthApi, AuthController, Authenticator, ConnectivityMonitor, CredentialStore, FileStore,
    HttpAuthApi, Navigator, Presenter, SessionContext,
};
use ft_config::Config;

use std::sync::Arc;

use log::debug;

/// Everything a command needs, wired from the effective configuration.
pub struct App {
    config: Config,
    store: CredentialStore,
    api: Arc<dyn AuthApi>,
}

impl App {
    pub fn new(config: Config) -> CliResult<Self> {
        let storage_path = config.storage_path()?;
        debug!("Session store at {}", storage_path.display());

        let store = CredentialStore::new(Arc::new(FileStore::open(storage_path)?));
        let api = Arc::new(HttpAuthApi::new(&config.api.base_url, config.api.timeout())?);

        Ok(Self::with_parts(config, store, api))
    }

    pub fn with_parts(config: Config, store: CredentialStore, api: Arc<dyn AuthApi>) -> Self {
        Self { config, store, api }
    }

    pub fn controller(
        &self,
        presenter: Arc<dyn Presenter>,
        navigator: Arc<dyn Navigator>,
    ) -> AuthController {
        let authenticator = Authenticator::new(
            self.store.clone(),
            Arc::clone(&self.api),
            self.config.session.fallback_policy,
        );

        AuthController::new(
            authenticator,
            presenter,
            navigator,
            self.config.session.register_redirect_delay(),
            self.config.ui.error_dismiss(),
        )
    }

    pub fn session_context(&self) -> SessionContext {
        SessionContext::new(self.store.clone(), Arc::clone(&self.api))
    }

    pub fn monitor(&self) -> ConnectivityMonitor {
        ConnectivityMonitor::new(
            Arc::clone(&self.api),
            self.config.connectivity.probe_interval(),
        )
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}
