use crate::remote::remote_user::RemoteUser;
use crate::store::credential_record::CredentialRecord;

use serde::{Deserialize, Serialize};

/// Snapshot of the signed-in user shown by the rest of the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
}

impl From<RemoteUser> for CurrentUser {
    fn from(user: RemoteUser) -> Self {
        Self {
            name: user.name,
            email: user.email,
        }
    }
}

impl From<CredentialRecord> for CurrentUser {
    fn from(record: CredentialRecord) -> Self {
        Self {
            name: record.full_name,
            email: record.email,
        }
    }
}
