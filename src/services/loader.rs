use moka::future::{Cache, CacheBuilder};
use std::sync::Arc;
use std::time::Duration;

use crate::core::{recognized_keys, resolve, ParamSource};
use crate::models::DashboardData;

const DEFAULT_KEY: &str = "dashboard:default";

/// Query-cache wrapper around the resolver
///
/// Resolved dashboards are cached under a canonical key built from the
/// recognized, non-empty parameters only, so unrelated query noise shares
/// an entry with the clean request.
pub struct DashboardLoader {
    cache: Cache<String, Arc<DashboardData>>,
}

impl DashboardLoader {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let cache = CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Resolve the dashboard for `params`, reusing a cached result when present
    pub async fn load<P>(&self, params: &P) -> Arc<DashboardData>
    where
        P: ParamSource + ?Sized,
    {
        let key = Self::cache_key(params);
        tracing::trace!("Loading dashboard: {}", key);

        self.cache
            .get_with(key, async { Arc::new(resolve(Some(params))) })
            .await
    }

    /// Canonical cache key: recognized keys in table order with encoded values
    pub fn cache_key<P>(params: &P) -> String
    where
        P: ParamSource + ?Sized,
    {
        let pairs: Vec<String> = recognized_keys()
            .filter_map(|key| {
                params
                    .param(&key)
                    .filter(|value| !value.is_empty())
                    .map(|value| format!("{}={}", key, urlencoding::encode(value)))
            })
            .collect();

        if pairs.is_empty() {
            DEFAULT_KEY.to_string()
        } else {
            format!("dashboard:{}", pairs.join("&"))
        }
    }

    /// Approximate number of cached dashboards
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Flush pending cache maintenance so `entry_count` is current
    pub async fn sync(&self) {
        self.cache.run_pending_tasks().await;
    }
}
