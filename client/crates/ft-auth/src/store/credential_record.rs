use serde::{Deserialize, Serialize};

/// A locally registered fallback account.
///
/// Created on local registration, never updated or deleted. `email` is the
/// unique key and compares case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
