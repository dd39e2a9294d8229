use crate::flows::auth_mode::AuthMode;
use crate::session::surface::Surface;
use crate::store::current_user::CurrentUser;

/// Successful login; the caller navigates to `destination()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub mode: AuthMode,
    pub user: CurrentUser,
}

impl LoginOutcome {
    pub fn destination(&self) -> Surface {
        Surface::App
    }
}
