use crate::store::error::Result as StoreResult;

/// String key-value storage with browser `localStorage` semantics.
///
/// Operations are individually consistent but sequences of them are not
/// transactional: two processes sharing the same backing storage can
/// interleave a read-modify-write.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
