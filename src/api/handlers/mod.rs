use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::Deserialize;

use crate::api::SportradarClient;
use crate::config::settings::AppConfig;
use crate::database::SqliteStore;
use crate::services::ingestion::IngestionService;

pub mod players;
pub mod sync;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
    pub ingestion: IngestionService<SportradarClient, SqliteStore>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}
