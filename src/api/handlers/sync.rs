use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};
use std::sync::Arc;

use crate::api::models::SyncResponse;
use crate::errors::IngestError;
use super::AppState;

pub async fn sync_player(
    State(state): State<Arc<AppState>>,
    Path(api_id_int): Path<u64>,
) -> impl IntoResponse {
    info!("Sync requested for competitor {}", api_id_int);

    match state.ingestion.sync_player(api_id_int).await {
        Ok(player) => Json(SyncResponse::from(&player)).into_response(),
        Err(e) => {
            error!("Sync failed for competitor {}: {}", api_id_int, e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

pub fn status_for(err: &IngestError) -> StatusCode {
    match err {
        IngestError::SourceUnavailable(_) => StatusCode::BAD_GATEWAY,
        IngestError::MalformedSourceData(_) => StatusCode::UNPROCESSABLE_ENTITY,
        IngestError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
