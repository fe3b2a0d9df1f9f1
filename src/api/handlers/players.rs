use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{PlayerSearchItem, PlayerView};
use crate::api::parsers::format_search;
use crate::database::{players, rankings, statistics};
use crate::domain::{self, identity, RankingKind};
use super::{AppState, SearchParams};

pub async fn view_player(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
) -> impl IntoResponse {
    let Some((slug, api_id_int)) = identity::parse_player_handle(&handle) else {
        return (StatusCode::NOT_FOUND, "Player not found").into_response();
    };

    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let api_id = domain::competitor_api_id(api_id_int);
    let player = match players::find_by_api_id(&conn, &api_id) {
        Ok(Some(player)) => player,
        Ok(None) => return (StatusCode::NOT_FOUND, "Player not found").into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let canonical_slug = player.slug();
    if canonical_slug != slug {
        let location = identity::view_path(&canonical_slug, api_id_int);
        return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response();
    }

    let singles = rankings::find_for_player(&conn, &api_id, RankingKind::Singles);
    let doubles = rankings::find_for_player(&conn, &api_id, RankingKind::Doubles);
    let stats = statistics::list_by_player(&conn, &api_id);

    let (singles_ranking, doubles_ranking, stats) = match (singles, doubles, stats) {
        (Ok(s), Ok(d), Ok(st)) => (s, d, st),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response();
        }
    };

    Json(PlayerView {
        player,
        slug: canonical_slug,
        singles_ranking,
        doubles_ranking,
        statistics: domain::format_statistics(&stats),
    })
    .into_response()
}

pub async fn search_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let terms = format_search(params.query.as_deref().unwrap_or(""));
    if terms.is_empty() {
        return Json(Vec::<PlayerSearchItem>::new()).into_response();
    }

    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match players::search_by_terms(&conn, &terms) {
        Ok(found) => {
            let items: Vec<PlayerSearchItem> = found.iter().map(PlayerSearchItem::from).collect();
            Json(items).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    }
}
