use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::Value;

use restartup::data::{AssistanceQueue, CreateGame, Game, GameUpdate};
use restartup::errors::FixtureError;
use restartup::id::GameId;
use restartup::log;

use super::HandlerResult;
use crate::AppState;
use crate::cookies;
use crate::services::GameStore;

pub async fn list(State(state): State<Arc<AppState>>) -> HandlerResult<Json<Vec<Game>>> {
    Ok(Json(state.games.list().await?))
}

/// Creates a game and makes the creating browser its moderator.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateGame>,
) -> HandlerResult<impl IntoResponse> {
    let game = state.games.create(&request.password).await?;
    log::info!("Created game {}", game.game_id);
    let cookie = cookies::admin_cookie(&game.game_id);
    Ok(([(SET_COOKIE, cookie)], Json(game)))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
) -> HandlerResult<Json<Game>> {
    Ok(Json(state.games.get(&game_id).await?))
}

/// Body of `PUT /{gameId}`. Exactly one key is expected; only its presence
/// matters, except for `pause` (empty resumes), `auto` and `assisting`.
#[derive(Debug, Default, Deserialize)]
pub struct GameCommand {
    pub round: Option<Value>,
    pub pause: Option<String>,
    pub auto: Option<bool>,
    pub end: Option<Value>,
    pub assisting: Option<String>,
}

/// Applies a moderator command. Only the game's admin may send one.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
    headers: HeaderMap,
    Json(command): Json<GameCommand>,
) -> HandlerResult<Json<GameUpdate>> {
    state.games.get(&game_id).await?;
    if !cookies::is_admin(&headers, &game_id) {
        return Err(FixtureError::NotModerator.into());
    }

    let update = if command.round.is_some() {
        state.games.advance_round(&game_id).await?
    } else if let Some(pause) = command.pause {
        state.games.set_paused(&game_id, !pause.is_empty()).await?
    } else if let Some(auto) = command.auto {
        state.games.set_auto_mode(&game_id, auto).await?
    } else if command.end.is_some() {
        state.games.end(&game_id).await?
    } else if let Some(name) = command.assisting {
        state.games.assist(&game_id, &name).await?
    } else {
        return Err(FixtureError::InvalidRequest("no command given".to_string()).into());
    };

    log::info!("Game {}: {}", game_id, update.as_wire());
    Ok(Json(update))
}

pub async fn assistance(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
) -> HandlerResult<Json<AssistanceQueue>> {
    Ok(Json(state.games.assistance(&game_id).await?))
}
