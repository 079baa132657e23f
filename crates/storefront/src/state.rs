//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;
use tracing::warn;

use crate::config::StorefrontConfig;
use crate::db::StoreConfigRepository;
use crate::models::StoreConfig;

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    http_client: reqwest::Client,
    /// Single-entry read cache for the store config row, which every menu
    /// render and checkout consults.
    store_config_cache: Cache<(), StoreConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Self {
        let store_config_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(config.store_config_cache_seconds))
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                http_client: reqwest::Client::new(),
                store_config_cache,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    #[must_use]
    pub fn http_client(&self) -> &reqwest::Client {
        &self.inner.http_client
    }

    /// Current store configuration, served from cache when fresh.
    ///
    /// Fails open: when the database is unreachable the built-in defaults
    /// are returned so the menu stays browsable, and the failure is logged.
    /// Failed loads are not cached.
    pub async fn store_config(&self) -> StoreConfig {
        let loaded = self
            .inner
            .store_config_cache
            .try_get_with((), async {
                StoreConfigRepository::new(&self.inner.pool)
                    .get_or_seed()
                    .await
            })
            .await;

        match loaded {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "failed to load store config, using defaults");
                StoreConfig::default()
            }
        }
    }
}
