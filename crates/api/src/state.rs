use std::sync::Arc;

use druk_travel_core::repository::admins::AdminRepository;
use druk_travel_core::repository::blogs::BlogRepository;
use druk_travel_core::repository::content::ContentRepository;
use druk_travel_core::repository::tours::TourRepository;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::mailer::Mailer;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    pool: PgPool,
    config: AppConfig,
    mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            inner: Arc::new(InnerState {
                pool,
                config,
                mailer,
            }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn mailer(&self) -> &dyn Mailer {
        self.inner.mailer.as_ref()
    }

    pub fn content(&self) -> ContentRepository {
        ContentRepository::new(self.inner.pool.clone())
    }

    pub fn tours(&self) -> TourRepository {
        TourRepository::new(self.inner.pool.clone())
    }

    pub fn blogs(&self) -> BlogRepository {
        BlogRepository::new(self.inner.pool.clone())
    }

    pub fn admins(&self) -> AdminRepository {
        AdminRepository::new(self.inner.pool.clone())
    }
}
