use crate::presentation::navigator::Navigator;
use crate::session::{
    resolution::Resolution, session_context::SessionContext, session_state::SessionState,
    surface::Surface,
};

use std::sync::Arc;

use log::{info, warn};

/// Executes the resolver's navigation decision, once per page load.
pub struct RouteGuard {
    navigator: Arc<dyn Navigator>,
    handled: bool,
}

impl RouteGuard {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            handled: false,
        }
    }

    /// Resolve the session for the page and navigate if required.
    ///
    /// Returns `None` when this guard already ran. A resolution that fails
    /// on storage is treated as unauthenticated.
    pub async fn on_page_load(
        &mut self,
        context: &mut SessionContext,
        surface: Surface,
    ) -> Option<Resolution> {
        if self.handled {
            return None;
        }
        self.handled = true;

        let resolution = match context.init_on_load(surface).await {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!("Session resolution failed, treating as signed out: {e}");
                Resolution::new(SessionState::Unauthenticated, surface)
            }
        };

        if let Some(target) = resolution.navigation.target() {
            info!("Redirecting from {surface} to {target}");
            self.navigator.navigate(target);
        }

        Some(resolution)
    }

    pub fn has_run(&self) -> bool {
        self.handled
    }
}
