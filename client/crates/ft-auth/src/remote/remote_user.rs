use serde::{Deserialize, Serialize};

/// User identity as reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    #[serde(default, alias = "fullName")]
    pub name: String,
    pub email: String,
}
