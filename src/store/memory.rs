//! In-process store used by router and handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{KvStore, Lookup, StoreError};

/// HashMap-backed store that answers the way Redis does: `DEL` on a missing
/// key reports a count of zero rather than absence.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Lookup<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned().into())
    }

    async fn delete(&self, key: &str) -> Result<Lookup<i64>, StoreError> {
        let removed = self.entries.lock().unwrap().remove(key);
        Ok(Lookup::Found(removed.map_or(0, |_| 1)))
    }
}
