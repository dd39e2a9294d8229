pub(crate) mod credential_record;
pub(crate) mod credential_store;
pub(crate) mod current_user;
pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod key_value_store;
pub(crate) mod memory_store;
pub(crate) mod session_flags;
pub(crate) mod store_keys;

pub use credential_record::CredentialRecord;
pub use credential_store::CredentialStore;
pub use current_user::CurrentUser;
pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use session_flags::SessionFlags;
