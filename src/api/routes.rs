use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{players::{search_players, view_player}, sync::sync_player, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/player/:handle", get(view_player))
        .route("/api/players/search", get(search_players))
        .route("/api/sync/:api_id_int", post(sync_player))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::api::SportradarClient;
    use crate::config::settings::AppConfig;
    use crate::database::{create_memory_pool, get_connection, setup, CommitBatch, RecordStore, SqliteStore};
    use crate::domain::{Player, PlayerStatistics, Ranking, RankingKind, StatisticsCounters};
    use crate::database::players;
    use crate::services::ingestion::IngestionService;
    use crate::services::server::build_state;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn player(api_id: &str, name: &str) -> Player {
        Player {
            id: None,
            api_id: api_id.to_string(),
            name: name.to_string(),
            nationality: "Spain".to_string(),
            country_code: "ESP".to_string(),
            abbreviation: "NAD".to_string(),
            gender: "male".to_string(),
            birth_date: date(1986, 6, 3),
            pro_year: Some(2001),
            handedness: Some("left".to_string()),
            height: Some(185),
            weight: Some(85),
            highest_singles_ranking: 1,
            highest_singles_ranking_date: date(2008, 8, 1),
            updated_at: date(2024, 1, 15).and_hms_opt(8, 0, 0).unwrap(),
        }
    }

    fn seeded_app() -> Router {
        let pool = create_memory_pool().unwrap();
        setup::ensure_schema(&get_connection(&pool).unwrap()).unwrap();
        let store = SqliteStore::new(pool.clone());

        store
            .commit(CommitBatch {
                player: player("sr:competitor:14486", "Nadal Rafael"),
                singles: Some(Ranking {
                    id: None,
                    player_api_id: "sr:competitor:14486".to_string(),
                    kind: RankingKind::Singles,
                    rank: Some(2),
                    points: Some(7480),
                    tournaments_played: Some(18),
                    ranking_date: date(2024, 1, 15),
                }),
                doubles: None,
                statistics: vec![PlayerStatistics {
                    id: None,
                    player_api_id: "sr:competitor:14486".to_string(),
                    surface: "red_clay".to_string(),
                    period: 2019,
                    counters: StatisticsCounters {
                        competitions_played: 5,
                        competitions_won: 4,
                        matches_played: 27,
                        matches_won: 26,
                    },
                }],
            })
            .unwrap();
        store
            .commit(CommitBatch {
                player: player("sr:competitor:14882", "Djokovic Novak"),
                singles: None,
                doubles: None,
                statistics: Vec::new(),
            })
            .unwrap();

        let config = AppConfig::new();
        let source = SportradarClient::new(&config.source).unwrap();
        let state = AppState {
            pool,
            config,
            ingestion: IngestionService::new(source, store),
        };
        create_router(Arc::new(state))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, location, body)
    }

    #[tokio::test]
    async fn test_view_player() {
        let (status, _, body) = get(seeded_app(), "/api/player/nadal-rafael-14486").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "nadal-rafael");
        assert_eq!(body["player"]["name"], "Nadal Rafael");
        assert_eq!(body["player"]["birthDate"], "1986-06-03");
        assert_eq!(body["singlesRanking"]["rank"], 2);
        assert!(body["doublesRanking"].is_null());
        assert_eq!(body["statistics"][0]["period"], 2019);
        assert_eq!(body["statistics"][0]["totals"]["matchesWon"], 26);
    }

    #[tokio::test]
    async fn test_view_player_redirects_to_canonical_slug() {
        let (status, location, _) = get(seeded_app(), "/api/player/rafa-14486").await;

        assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(location.as_deref(), Some("/api/player/nadal-rafael-14486"));
    }

    #[tokio::test]
    async fn test_view_unknown_player() {
        let (status, _, _) = get(seeded_app(), "/api/player/nobody-1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = get(seeded_app(), "/api/player/no-id-here").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_players() {
        let (status, _, body) = get(seeded_app(), "/api/players/search?query=rafael%20NADAL").await;

        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Nadal Rafael");
        assert_eq!(items[0]["apiIdInt"], 14486);
        assert_eq!(items[0]["location"], "/api/player/nadal-rafael-14486");
    }

    #[tokio::test]
    async fn test_search_without_query_is_empty() {
        let (status, _, body) = get(seeded_app(), "/api/players/search").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sync_with_unreachable_source_commits_nothing() {
        let path = std::env::temp_dir().join(format!("tennis_sync_route_{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut config = AppConfig::new();
        config.database.path = path.to_string_lossy().into_owned();
        config.source.base_url = "http://127.0.0.1:9".to_string();
        config.source.timeout_secs = 5;

        let state = Arc::new(build_state(config).unwrap());
        let app = create_router(state.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sync/14486")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let conn = get_connection(&state.pool).unwrap();
        assert_eq!(players::count(&conn).unwrap(), 0);

        drop(conn);
        drop(state);
        let _ = std::fs::remove_file(&path);
    }
}
