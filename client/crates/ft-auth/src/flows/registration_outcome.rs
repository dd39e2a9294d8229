use crate::flows::auth_mode::AuthMode;
use crate::messages::ACCOUNT_CREATED;
use crate::session::surface::Surface;

/// Successful registration. Both modes look identical to the user: the
/// same notice, then a delayed jump to the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub mode: AuthMode,
}

impl RegistrationOutcome {
    pub fn notice(&self) -> &'static str {
        ACCOUNT_CREATED
    }

    pub fn destination(&self) -> Surface {
        Surface::Auth
    }
}
