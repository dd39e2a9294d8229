//! Key names of the persisted session document.

pub const TOKEN_KEY: &str = "token";
pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";
pub const REMEMBER_ME_KEY: &str = "rememberMe";

/// Booleans are stored as the strings "true"/"false".
pub const TRUE_VALUE: &str = "true";
