//! A local stand-in for the game service, serving the routes the frontend
//! calls from an in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use chrono::{DateTime, Utc};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod cookies;
pub mod handlers;
pub mod ids;
pub mod seed;
pub mod services;

use handlers::{auth, games, health, players, review};
use services::GameStoreInMemory;

pub struct AppState {
    pub games: GameStoreInMemory,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            games: GameStoreInMemory::new(),
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Browsers may only call in from the usual local dev server ports. Requests
/// carry cookies, so the origins have to be listed explicitly.
fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        [3000, 8000, 8080, 8081, 5173]
            .into_iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        Vec::new()
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::PUT])
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(games::list).post(games::create))
        .route("/health", get(health::get))
        .route("/{game_id}", get(games::get).put(games::update))
        .route("/{game_id}/auth", get(auth::status).post(auth::login))
        .route("/{game_id}/assist", get(games::assistance))
        .route("/{game_id}/scores", get(review::running_totals))
        .route("/{game_id}/players", get(players::list).post(players::join))
        .route("/{game_id}/players/{player_id}", get(players::get))
        .route(
            "/{game_id}/players/{player_id}/events",
            get(players::events),
        )
        .route(
            "/{game_id}/players/{player_id}/events/{event_id}",
            get(players::event),
        )
        .route("/{game_id}/review/existed", get(review::existed))
        .route("/{game_id}/review/finalgraph", get(review::running_totals))
        .route("/{game_id}/review/finalboard", get(review::final_board))
        .route("/{game_id}/review/stats", get(review::stats))
        .route("/{game_id}/review/analysis", get(review::analysis))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
