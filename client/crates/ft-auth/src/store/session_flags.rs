use crate::store::current_user::CurrentUser;

/// Local authentication flags, independent of any session token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub is_authenticated: bool,
    pub remember_me: bool,
    pub current_user: Option<CurrentUser>,
}

impl SessionFlags {
    /// True only when the flag is set AND a user snapshot is present.
    pub fn is_signed_in(&self) -> bool {
        self.is_authenticated && self.current_user.is_some()
    }
}
