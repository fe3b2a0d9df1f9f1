use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::api::SportradarClient;
use crate::config::settings::AppConfig;
use crate::database::{self, SqliteStore};
use crate::services::ingestion::IngestionService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let state = Arc::new(build_state(self.config.clone())?);

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Opens the database, makes sure the schema exists and wires the ingestion service
pub fn build_state(config: AppConfig) -> Result<AppState> {
    let pool = database::open_database(&config.database.path)?;

    let source = SportradarClient::new(&config.source)?;
    let ingestion = IngestionService::new(source, SqliteStore::new(pool.clone()));

    Ok(AppState {
        pool,
        config,
        ingestion,
    })
}
