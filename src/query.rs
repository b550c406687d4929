//! Keyed cache for remote data.
//!
//! Each key owns its own entry so switching between keys never mixes
//! results. A failed fetch records the error but keeps whatever data the
//! entry already had.

use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Entries older than this are refetched on the next mount or key change.
pub const STALE_TIME: Duration = Duration::seconds(30);

#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_fetching: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
            updated_at: None,
        }
    }
}

impl<T> QueryState<T> {
    /// First fetch in flight, nothing to show yet
    pub fn is_loading(&self) -> bool {
        self.is_fetching && self.data.is_none()
    }

    pub fn is_stale(&self, now: DateTime<Utc>, stale_time: Duration) -> bool {
        match self.updated_at {
            Some(updated_at) => now - updated_at >= stale_time,
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryCache<T> {
    entries: HashMap<String, QueryState<T>>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Clone> QueryCache<T> {
    /// Current state for `key`, idle if the key was never requested.
    pub fn snapshot(&self, key: &str) -> QueryState<T> {
        self.entries.get(key).cloned().unwrap_or_default()
    }

    /// A key in flight is never fetched a second time.
    pub fn needs_fetch(&self, key: &str, now: DateTime<Utc>, stale_time: Duration) -> bool {
        match self.entries.get(key) {
            Some(entry) => !entry.is_fetching && entry.is_stale(now, stale_time),
            None => true,
        }
    }

    pub fn begin_fetch(&mut self, key: &str) {
        self.entries.entry(key.to_string()).or_default().is_fetching = true;
    }

    /// Clears the in-flight marker of a fetch that was dropped before it
    /// settled.
    pub fn abandon(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            log::debug!("query {} abandoned", key);
            entry.is_fetching = false;
        }
    }

    pub fn settle(&mut self, key: &str, result: Result<T, String>, now: DateTime<Utc>) {
        let entry = self.entries.entry(key.to_string()).or_default();
        entry.is_fetching = false;
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
                entry.updated_at = Some(now);
            }
            Err(e) => {
                log::debug!("query {} failed: {}", key, e);
                entry.error = Some(e);
            }
        }
    }
}

/// Anything holding a query cache that can be updated in place.
pub trait QueryStore<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut QueryCache<T>) -> R) -> R;
}

impl<T> QueryStore<T> for QueryCache<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut QueryCache<T>) -> R) -> R {
        f(self)
    }
}

impl<T: 'static> QueryStore<T> for Signal<QueryCache<T>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut QueryCache<T>) -> R) -> R {
        f(&mut *self.write())
    }
}

/// Marks a key as fetching for as long as it lives.
///
/// Dropping it without `settle` (the owning future was cancelled) abandons
/// the fetch so the key does not stay in flight forever.
pub struct InFlight<'a, T: Clone, S: QueryStore<T>> {
    store: &'a mut S,
    key: String,
    settled: bool,
    _item: PhantomData<T>,
}

impl<'a, T: Clone, S: QueryStore<T>> InFlight<'a, T, S> {
    pub fn start(store: &'a mut S, key: String) -> Self {
        store.update(|cache| cache.begin_fetch(&key));
        Self {
            store,
            key,
            settled: false,
            _item: PhantomData,
        }
    }

    pub fn settle(mut self, result: Result<T, String>, now: DateTime<Utc>) {
        self.settled = true;
        let key = &self.key;
        self.store.update(|cache| cache.settle(key, result, now));
    }
}

impl<T: Clone, S: QueryStore<T>> Drop for InFlight<'_, T, S> {
    fn drop(&mut self) {
        if !self.settled {
            let key = &self.key;
            self.store.update(|cache| cache.abandon(key));
        }
    }
}
