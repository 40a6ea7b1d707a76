use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use serde::Serialize;

use restartup::data::{JoinGame, Player, PlayerEvent};
use restartup::id::{EventId, GameId, PlayerId};
use restartup::log;

use super::HandlerResult;
use crate::AppState;
use crate::cookies;
use crate::services::GameStore;

#[derive(Debug, Serialize)]
pub struct PlayersBody {
    pub players: BTreeMap<PlayerId, Player>,
}

#[derive(Debug, Serialize)]
pub struct EventsBody {
    pub events: Vec<PlayerEvent>,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
) -> HandlerResult<Json<PlayersBody>> {
    let players = state.games.players(&game_id).await?;
    Ok(Json(PlayersBody { players }))
}

/// Registers a player and remembers them in this browser.
pub async fn join(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
    Json(request): Json<JoinGame>,
) -> HandlerResult<impl IntoResponse> {
    let player = state.games.join(&game_id, request).await?;
    log::info!(
        "{} joined game {} as {}",
        player.name,
        game_id,
        player.player_id
    );
    let cookie = cookies::player_cookie(&game_id, &player.player_id);
    Ok(([(SET_COOKIE, cookie)], Json(player)))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path((game_id, player_id)): Path<(GameId, PlayerId)>,
) -> HandlerResult<Json<Player>> {
    Ok(Json(state.games.player(&game_id, &player_id).await?))
}

pub async fn events(
    State(state): State<Arc<AppState>>,
    Path((game_id, player_id)): Path<(GameId, PlayerId)>,
) -> HandlerResult<Json<EventsBody>> {
    let events = state.games.events(&game_id, &player_id).await?;
    Ok(Json(EventsBody { events }))
}

pub async fn event(
    State(state): State<Arc<AppState>>,
    Path((game_id, player_id, event_id)): Path<(GameId, PlayerId, EventId)>,
) -> HandlerResult<Json<PlayerEvent>> {
    Ok(Json(
        state.games.event(&game_id, &player_id, &event_id).await?,
    ))
}
