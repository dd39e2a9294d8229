use crate::session::{session_state::SessionState, surface::Surface};

/// What the current page should do after a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Render the current page.
    Allow,
    RedirectToApp,
    RedirectToLogin,
}

impl Navigation {
    /// Pure routing rule: signed-in users leave the auth surface, everybody
    /// else is kept off the app surface.
    pub fn decide(state: SessionState, surface: Surface) -> Self {
        match (state.is_authenticated(), surface) {
            (true, Surface::Auth) => Self::RedirectToApp,
            (false, Surface::App) => Self::RedirectToLogin,
            _ => Self::Allow,
        }
    }

    pub fn target(&self) -> Option<Surface> {
        match self {
            Self::Allow => None,
            Self::RedirectToApp => Some(Surface::App),
            Self::RedirectToLogin => Some(Surface::Auth),
        }
    }
}
