use std::sync::Arc;

use crate::config::ServerConfig;
use crate::mailer::Mailer;
use crate::storage::Storage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Local file storage for uploaded images.
    pub storage: Arc<Storage>,
    /// Outbound mail, when SMTP is configured.
    pub mailer: Option<Arc<Mailer>>,
}
