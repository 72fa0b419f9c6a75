use crate::traits::KeyValueStore;
use parking_lot::Mutex;
use score_core::ScoreResult;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-process store. Used for sessions that should not touch disk, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.lock().insert(key.into(), value.into());
        store
    }

    /// Synchronous read, handy for assertions.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    /// Number of `set` calls served so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> ScoreResult<Option<String>> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: String) -> ScoreResult<()> {
        self.values.lock().insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: &str) -> ScoreResult<()> {
        self.values.lock().remove(key);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("scoreRows").await.unwrap().is_none());

        store.set("scoreRows", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("scoreRows").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(store.write_count(), 1);

        store.remove("scoreRows").await.unwrap();
        assert!(store.peek("scoreRows").is_none());
    }

    #[test]
    fn test_with_value() {
        let store = MemoryStore::with_value("scoreRows", "[]");
        assert_eq!(store.peek("scoreRows").as_deref(), Some("[]"));
        assert_eq!(store.write_count(), 0);
    }
}
