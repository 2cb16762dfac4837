use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, RedisError};
use tokio::sync::Mutex;

use super::{KvStore, Lookup, StoreError};
use crate::config::Config;

/// Cached connection tagged with the generation it was installed under, so
/// a request holding an older connection cannot evict a newer one.
#[derive(Debug)]
struct Slot<C> {
    generation: u64,
    conn: Option<C>,
}

impl<C> Default for Slot<C> {
    fn default() -> Self {
        Self { generation: 0, conn: None }
    }
}

impl<C: Clone> Slot<C> {
    fn current(&self) -> Option<(u64, C)> {
        self.conn.clone().map(|conn| (self.generation, conn))
    }

    /// Cache `conn` unless another request got there first, in which case
    /// the cached connection wins and `conn` is dropped.
    fn install(&mut self, conn: C) -> (u64, C) {
        if let Some(current) = self.current() {
            return current;
        }
        self.generation += 1;
        self.conn = Some(conn.clone());
        (self.generation, conn)
    }

    /// Drop the cached connection if it is still the one from `generation`.
    fn discard(&mut self, generation: u64) -> bool {
        if self.conn.is_some() && self.generation == generation {
            self.conn = None;
            true
        } else {
            false
        }
    }
}

/// Redis-backed store shared by all handlers
///
/// The client is built without touching the network. The first operation
/// opens a multiplexed connection that every later request reuses; a
/// connection-level failure drops it so the next request reconnects.
/// Connecting happens outside the slot lock, so concurrent requests against
/// a dead server each fail after one connect attempt of their own.
/// There are no retries within a request.
pub struct RedisStore {
    client: Client,
    slot: Mutex<Slot<MultiplexedConnection>>,
}

impl RedisStore {
    /// Create a store for the Redis server named in the configuration
    ///
    /// # Errors
    /// Returns an error only if the connection settings are rejected by the
    /// client; reachability is not checked here.
    pub fn from_config(config: &Config) -> Result<Self> {
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(config.redis_host.clone(), config.redis_port),
            redis: RedisConnectionInfo {
                db: config.redis_db,
                password: config.redis_password.clone(),
                ..Default::default()
            },
        };

        let client = Client::open(info).context("Invalid Redis connection settings")?;

        tracing::info!(
            "Redis client configured for {}:{} (db {})",
            config.redis_host,
            config.redis_port,
            config.redis_db
        );

        Ok(Self {
            client,
            slot: Mutex::new(Slot::default()),
        })
    }

    /// Return the shared connection and its generation, opening one if none
    /// is held
    async fn connection(&self) -> Result<(u64, MultiplexedConnection), StoreError> {
        if let Some(current) = self.slot.lock().await.current() {
            return Ok(current);
        }

        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .inspect_err(|e| tracing::warn!("Failed to connect to Redis: {}", e))?;
        tracing::debug!("Opened Redis connection");

        Ok(self.slot.lock().await.install(conn))
    }

    /// Pass a command reply through, dropping the shared connection when the
    /// error means it can no longer be used.
    async fn settle<T>(&self, generation: u64, reply: Result<T, RedisError>) -> Result<T, StoreError> {
        let broken = reply.as_ref().err().is_some_and(|e| {
            e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal()
        });
        if broken && self.slot.lock().await.discard(generation) {
            tracing::warn!("Discarding Redis connection after a connection error");
        }
        reply.map_err(StoreError::from)
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let (generation, mut conn) = self.connection().await?;
        let reply: Result<(), RedisError> = conn.set(key, value).await;
        self.settle(generation, reply).await?;

        tracing::debug!("SET {}", key);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Lookup<String>, StoreError> {
        let (generation, mut conn) = self.connection().await?;
        let reply: Result<Option<String>, RedisError> = conn.get(key).await;
        let value = self.settle(generation, reply).await?;

        tracing::debug!("GET {} (found: {})", key, value.is_some());
        Ok(value.into())
    }

    async fn delete(&self, key: &str) -> Result<Lookup<i64>, StoreError> {
        let (generation, mut conn) = self.connection().await?;
        // DEL answers with an integer count; a nil reply is treated as absence
        let reply: Result<Option<i64>, RedisError> = conn.del(key).await;
        let count = self.settle(generation, reply).await?;

        tracing::debug!("DEL {} (deleted: {:?})", key, count);
        Ok(count.into())
    }
}
