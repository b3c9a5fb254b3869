use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Read-through cache keyed by request URL.
///
/// Entries never expire. Two callers missing the same key at once both
/// fetch and the later insert wins; values for a key are identical, so the
/// race is harmless. No map guard is held across an `.await`.
#[derive(Debug)]
pub struct ReadThroughCache<V> {
    entries: DashMap<String, Arc<V>>,
}

impl<V> Default for ReadThroughCache<V> {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<V> ReadThroughCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Return the cached value or run `fetch` and cache its success.
    /// Failures are returned as-is and leave the key empty.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get(key) {
            debug!(key, "cache hit");
            return Ok(hit);
        }
        debug!(key, "cache miss");
        let value = Arc::new(fetch().await?);
        self.entries.insert(key.to_string(), Arc::clone(&value));
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
