//! Shared page cache with path-wide invalidation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::trace;

/// How long a cached page stays fresh. Five minutes is short enough that
/// monitoring data never goes badly stale between refreshes.
const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Cache key: the collection path plus the exact canonical query string,
/// page size included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    path: String,
    query: String,
}

struct CacheEntry {
    body: serde_json::Value,
    fetched_at: Instant,
}

/// A read cache for paginated collection responses, shared by every
/// resource client created from one session.
///
/// Consistency contract: any successful mutation on a path invalidates all
/// cached pages for that path; entries are never merged or patched.
#[derive(Clone)]
pub(crate) struct PageCache {
    inner: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
    ttl: Duration,
}

impl PageCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Look up a cached page that is still within its TTL.
    pub async fn get(&self, path: &str, query: &str) -> Option<serde_json::Value> {
        let cache = self.inner.read().await;
        let key = CacheKey {
            path: path.to_string(),
            query: query.to_string(),
        };
        let entry = cache.get(&key)?;
        if entry.fetched_at.elapsed() > self.ttl {
            return None;
        }
        trace!(path, query, "page cache hit");
        Some(entry.body.clone())
    }

    /// Store a freshly fetched page.
    pub async fn insert(&self, path: &str, query: &str, body: serde_json::Value) {
        let mut cache = self.inner.write().await;
        cache.insert(
            CacheKey {
                path: path.to_string(),
                query: query.to_string(),
            },
            CacheEntry {
                body,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop every cached page for a collection path.
    pub async fn invalidate_path(&self, path: &str) {
        let mut cache = self.inner.write().await;
        cache.retain(|key, _| key.path != path);
        trace!(path, "page cache invalidated");
    }

    /// Drop everything, e.g. on logout.
    pub async fn clear(&self) {
        let mut cache = self.inner.write().await;
        cache.clear();
    }
}

impl std::fmt::Debug for PageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache").field("ttl", &self.ttl).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn returns_inserted_entry() {
        let cache = PageCache::new();
        cache
            .insert("/api/users/", "page=1", json!({"count": 1}))
            .await;

        let hit = cache.get("/api/users/", "page=1").await;
        assert_eq!(hit, Some(json!({"count": 1})));
    }

    #[tokio::test]
    async fn distinguishes_query_sets() {
        let cache = PageCache::new();
        cache
            .insert("/api/users/", "page=1", json!({"page": 1}))
            .await;

        assert!(cache.get("/api/users/", "page=2").await.is_none());
    }

    #[tokio::test]
    async fn invalidation_is_path_wide() {
        let cache = PageCache::new();
        cache
            .insert("/api/users/", "page=1", json!({"page": 1}))
            .await;
        cache
            .insert("/api/users/", "page=2", json!({"page": 2}))
            .await;
        cache
            .insert("/alerts/alerts/", "page=1", json!({"page": 1}))
            .await;

        cache.invalidate_path("/api/users/").await;

        assert!(cache.get("/api/users/", "page=1").await.is_none());
        assert!(cache.get("/api/users/", "page=2").await.is_none());
        assert!(cache.get("/alerts/alerts/", "page=1").await.is_some());
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = PageCache::with_ttl(Duration::from_millis(10));
        cache.insert("/api/users/", "page=1", json!({})).await;

        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(cache.get("/api/users/", "page=1").await.is_none());
    }
}
