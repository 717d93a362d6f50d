use std::sync::Arc;

use tokio::sync::RwLock;

use crate::assist::TextGenerator;
use crate::config::Config;
use crate::metrics::time_range::TimeRange;
use crate::store::AgencyStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Queries take the read lock; add/update/remove take the write lock.
    pub store: Arc<RwLock<AgencyStore>>,
    /// Pluggable generator. `LlmTextGenerator` when ANTHROPIC_API_KEY is set.
    pub text_generator: Arc<dyn TextGenerator>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        store: AgencyStore,
        text_generator: Arc<dyn TextGenerator>,
        config: Config,
    ) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            text_generator,
            config,
        }
    }

    /// Range used when a request omits `?range=`.
    pub fn default_range(&self) -> TimeRange {
        self.config.default_time_range
    }
}
