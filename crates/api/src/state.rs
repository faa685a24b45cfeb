use std::sync::Arc;

use pagecraft_ai::AiClient;

use crate::config::ServerConfig;
use crate::edit_locks::EditLocks;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pagecraft_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// AI Edit Adapter client.
    pub ai: Arc<AiClient>,
    /// In-flight AI edit serialization per section id.
    pub edit_locks: EditLocks,
}
