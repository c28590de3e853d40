use std::sync::Arc;

use presence_core::store::PresenceStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (data paths, user ordering).
    pub config: Arc<ServerConfig>,
    /// Guarded, cached presence log.
    pub presence: Arc<PresenceStore>,
}

impl AppState {
    /// Build state from configuration, creating the presence store.
    pub fn new(config: ServerConfig) -> Self {
        let presence = PresenceStore::new(config.presence_csv.clone(), config.cache_ttl);
        Self {
            config: Arc::new(config),
            presence: Arc::new(presence),
        }
    }
}
