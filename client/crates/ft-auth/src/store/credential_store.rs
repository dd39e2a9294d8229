use crate::store::{
    credential_record::CredentialRecord,
    current_user::CurrentUser,
    error::{Result as StoreResult, StoreError},
    key_value_store::KeyValueStore,
    session_flags::SessionFlags,
    store_keys::{
        CURRENT_USER_KEY, IS_AUTHENTICATED_KEY, REMEMBER_ME_KEY, TOKEN_KEY, TRUE_VALUE, USERS_KEY,
    },
};

use std::sync::Arc;

use log::{debug, warn};

/// Typed view over the persisted session document: the local user table,
/// the session token and the session flags.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    // =========================================================================
    // Local user table
    // =========================================================================

    /// All local fallback accounts. A missing table is empty.
    pub fn users(&self) -> StoreResult<Vec<CredentialRecord>> {
        match self.backend.get(USERS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StoreError::corrupted(USERS_KEY, e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// Exact, case-sensitive match on both email and password.
    pub fn find_user(&self, email: &str, password: &str) -> StoreResult<Option<CredentialRecord>> {
        Ok(self
            .users()?
            .into_iter()
            .find(|record| record.matches(email, password)))
    }

    pub fn email_exists(&self, email: &str) -> StoreResult<bool> {
        Ok(self.users()?.iter().any(|record| record.email == email))
    }

    /// Appends `record` unless its email is already taken.
    ///
    /// Returns `false` on a duplicate. The check and the append are two
    /// separate storage operations.
    pub fn add_user(&self, record: CredentialRecord) -> StoreResult<bool> {
        let mut users = self.users()?;
        if users.iter().any(|existing| existing.email == record.email) {
            return Ok(false);
        }

        debug!("Adding local account for {}", record.email);
        users.push(record);
        let raw = serde_json::to_string(&users)?;
        self.backend.set(USERS_KEY, &raw)?;
        Ok(true)
    }

    // =========================================================================
    // Session token
    // =========================================================================

    pub fn token(&self) -> StoreResult<Option<String>> {
        Ok(self
            .backend
            .get(TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    pub fn set_token(&self, token: &str) -> StoreResult<()> {
        self.backend.set(TOKEN_KEY, token)
    }

    pub fn clear_token(&self) -> StoreResult<()> {
        self.backend.remove(TOKEN_KEY)
    }

    // =========================================================================
    // Session flags
    // =========================================================================

    /// Reads the flags. An unreadable user snapshot reads as `None`.
    pub fn session_flags(&self) -> StoreResult<SessionFlags> {
        let is_authenticated = self.read_bool(IS_AUTHENTICATED_KEY)?;
        let remember_me = self.read_bool(REMEMBER_ME_KEY)?;

        let current_user = match self.backend.get(CURRENT_USER_KEY)? {
            Some(raw) => match serde_json::from_str::<CurrentUser>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Ignoring unreadable current user snapshot: {e}");
                    None
                }
            },
            None => None,
        };

        let flags = SessionFlags {
            is_authenticated,
            remember_me,
            current_user,
        };

        if flags.is_authenticated && !flags.is_signed_in() {
            warn!("Authenticated flag set without a current user; treating as signed out");
        }

        Ok(flags)
    }

    /// Marks `user` as signed in. `remember_me` only ever sets the flag.
    pub fn sign_in(&self, user: &CurrentUser, remember_me: bool) -> StoreResult<()> {
        let raw = serde_json::to_string(user)?;
        self.backend.set(CURRENT_USER_KEY, &raw)?;
        self.backend.set(IS_AUTHENTICATED_KEY, TRUE_VALUE)?;

        if remember_me {
            self.backend.set(REMEMBER_ME_KEY, TRUE_VALUE)?;
        }

        Ok(())
    }

    /// Clears the flags, the user snapshot and the token.
    pub fn sign_out(&self) -> StoreResult<()> {
        self.backend.remove(IS_AUTHENTICATED_KEY)?;
        self.backend.remove(CURRENT_USER_KEY)?;
        self.backend.remove(REMEMBER_ME_KEY)?;
        self.backend.remove(TOKEN_KEY)?;
        Ok(())
    }

    fn read_bool(&self, key: &str) -> StoreResult<bool> {
        Ok(self.backend.get(key)?.as_deref() == Some(TRUE_VALUE))
    }
}
