use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
pub mod memory;
pub mod redis_store;

pub use redis_store::RedisStore;

/// Result of a store read or delete that distinguishes an absent key from
/// a successful reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Absent,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(reply: Option<T>) -> Self {
        match reply {
            Some(value) => Lookup::Found(value),
            None => Lookup::Absent,
        }
    }
}

/// Any failure other than an absent key: connection refused, protocol
/// error, timeout, wrong value type.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store operation failed: {0}")]
    OperationFailed(#[from] redis::RedisError),
}

/// Key-value operations the HTTP layer issues, one per request.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Unconditionally overwrite `key` with `value`, without expiry.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Lookup<String>, StoreError>;

    /// Remove `key`, returning the number of keys deleted (0 or 1).
    async fn delete(&self, key: &str) -> Result<Lookup<i64>, StoreError>;
}
