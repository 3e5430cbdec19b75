use std::sync::Arc;

use crate::catalog::repo::{CatalogStore, MemCatalog};
use crate::config::AppConfig;
use crate::orders::repo::{MemOrders, OrderStore};

/// Shared handler state. Stores sit behind trait objects so the in-memory
/// implementations can be swapped for persistent ones without touching the
/// API layer.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    pub orders: Arc<dyn OrderStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State for a fresh process: config from the environment, seeded
    /// catalog, empty order store.
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_parts(
            Arc::new(MemCatalog::seeded()),
            Arc::new(MemOrders::new()),
            config,
        ))
    }

    pub fn from_parts(
        catalog: Arc<dyn CatalogStore>,
        orders: Arc<dyn OrderStore>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            catalog,
            orders,
            config,
        }
    }
}
