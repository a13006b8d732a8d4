//! Keyed result cache with a freshness window and in-flight de-duplication.
//!
//! - A successful value is reused until it is older than `stale_time`.
//! - At most one fetch per key runs at a time. Callers that arrive while
//!   it runs wait on a `watch` channel and receive the same settled result.
//! - Failures are handed to every waiter but never stored.
//! - If the caller running a fetch is dropped, one of the waiters takes
//!   over.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::query::error::QueryError;
use crate::query::retry::RetryPolicy;

type Settled<V> = Option<Result<V, QueryError>>;

/// A cached value together with its age.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached<V> {
    pub value: V,
    pub age: Duration,
    pub is_stale: bool,
}

struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
}

struct CacheState<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    in_flight: HashMap<K, watch::Receiver<Settled<V>>>,
}

enum Lookup<V> {
    Fresh(V),
    Wait(watch::Receiver<Settled<V>>),
    Lead(watch::Sender<Settled<V>>),
}

pub struct QueryCache<K, V> {
    inner: Arc<Mutex<CacheState<K, V>>>,
    stale_time: Duration,
    retry: RetryPolicy,
}

impl<K, V> Clone for QueryCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stale_time: self.stale_time,
            retry: self.retry,
        }
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Display,
    V: Clone,
{
    pub fn new(stale_time: Duration, retry: RetryPolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheState {
                entries: HashMap::new(),
                in_flight: HashMap::new(),
            })),
            stale_time,
            retry,
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// Return the fresh cached value for `key`, join the fetch already in
    /// flight for it, or run `fetcher` (with retries) and cache the result.
    pub async fn fetch<F, Fut>(&self, key: K, fetcher: F) -> Result<V, QueryError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<V, QueryError>>,
    {
        loop {
            match self.lookup(&key) {
                Lookup::Fresh(value) => {
                    tracing::trace!(query = %key, "Cache hit");
                    return Ok(value);
                }
                Lookup::Wait(mut rx) => {
                    tracing::debug!(query = %key, "Joining in-flight fetch");
                    let settled = match rx.wait_for(Option::is_some).await {
                        Ok(value) => (*value).clone(),
                        Err(_) => None,
                    };
                    if let Some(result) = settled {
                        return result;
                    }
                    // The leading caller was dropped before settling.
                }
                Lookup::Lead(tx) => {
                    tracing::debug!(query = %key, "Cache miss, fetching");
                    let guard = InFlightGuard {
                        cache: self,
                        key: &key,
                        armed: true,
                    };
                    let label = key.to_string();
                    let result = self.retry.run(&label, &fetcher).await;
                    guard.settle(&result);
                    let _ = tx.send(Some(result.clone()));
                    return result;
                }
            }
        }
    }

    fn lookup(&self, key: &K) -> Lookup<V> {
        let mut state = self.inner.lock();

        if let Some(entry) = state.entries.get(key) {
            if entry.fetched_at.elapsed() < self.stale_time {
                return Lookup::Fresh(entry.value.clone());
            }
        }

        if let Some(rx) = state.in_flight.get(key) {
            return Lookup::Wait(rx.clone());
        }

        let (tx, rx) = watch::channel(None);
        state.in_flight.insert(key.clone(), rx);
        Lookup::Lead(tx)
    }

    /// Cached value for `key`, fresh or not, without fetching.
    pub fn peek(&self, key: &K) -> Option<Cached<V>> {
        let state = self.inner.lock();
        state.entries.get(key).map(|entry| {
            let age = entry.fetched_at.elapsed();
            Cached {
                value: entry.value.clone(),
                age,
                is_stale: age >= self.stale_time,
            }
        })
    }

    pub fn is_fetching(&self, key: &K) -> bool {
        self.inner.lock().in_flight.contains_key(key)
    }

    /// Drop the cached value for `key`. Returns whether one existed.
    pub fn invalidate(&self, key: &K) -> bool {
        self.inner.lock().entries.remove(key).is_some()
    }

    /// Drop every cached value. In-flight fetches still settle normally.
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Removes the in-flight marker if the leading fetch is dropped early.
struct InFlightGuard<'a, K, V>
where
    K: Eq + Hash,
{
    cache: &'a QueryCache<K, V>,
    key: &'a K,
    armed: bool,
}

impl<K, V> InFlightGuard<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn settle(mut self, result: &Result<V, QueryError>) {
        let mut state = self.cache.inner.lock();
        state.in_flight.remove(self.key);
        if let Ok(value) = result {
            state.entries.insert(
                self.key.clone(),
                CacheEntry {
                    value: value.clone(),
                    fetched_at: Instant::now(),
                },
            );
        }
        self.armed = false;
    }
}

impl<K, V> Drop for InFlightGuard<'_, K, V>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        if self.armed {
            self.cache.inner.lock().in_flight.remove(self.key);
        }
    }
}
