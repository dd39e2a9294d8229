use crate::remote::remote_user::RemoteUser;

use serde::Deserialize;

/// Body of a successful `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: RemoteUser,
}
