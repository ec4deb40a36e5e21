// Time-bounded cache over a local key/value store.
// Entries are JSON `{timestamp, payload}` records replaced wholesale on write.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::KeyValueStore;

/// Wrapper for cached data with its creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Creation time in Unix milliseconds.
    pub timestamp: i64,
    pub payload: T,
}

impl<T> CacheEntry<T> {
    pub fn new(payload: T, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now.timestamp_millis(),
            payload,
        }
    }

    /// Check if the entry is older than `ttl` at `now`.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        let age_ms = now.timestamp_millis() - self.timestamp;
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        age_ms > ttl_ms
    }
}

/// Best-effort cache: reads never fail and writes never block the caller.
pub struct CacheStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CacheStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Option<T> {
        self.get_at(key, ttl, Utc::now())
    }

    /// Read `key` as of `now`; missing, corrupt or expired entries are absent.
    pub fn get_at<T: DeserializeOwned>(
        &self,
        key: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "cache read failed");
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(key, error = %e, "ignoring unreadable cache entry");
                return None;
            }
        };

        if entry.is_expired(ttl, now) {
            debug!(key, "cache entry expired");
            self.remove(key);
            return None;
        }

        Some(entry.payload)
    }

    pub fn put<T: Serialize>(&self, key: &str, value: &T) {
        self.put_at(key, value, Utc::now())
    }

    /// Write `value` under `key` stamped with `now`. Failures are swallowed.
    pub fn put_at<T: Serialize>(&self, key: &str, value: &T, now: DateTime<Utc>) {
        let json = match serde_json::to_string(&CacheEntry::new(value, now)) {
            Ok(json) => json,
            Err(e) => {
                debug!(key, error = %e, "cache entry not serializable");
                return;
            }
        };

        if let Err(e) = self.store.set_item(key, &json) {
            debug!(key, error = %e, "cache write skipped");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove_item(key) {
            warn!(key, error = %e, "failed to remove cache entry");
        }
    }

    /// Drop every entry in the underlying store.
    pub fn clear(&self) -> crate::errors::BlogrollResult<()> {
        self.store.clear()
    }
}
