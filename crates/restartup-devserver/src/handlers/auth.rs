use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};

use restartup::data::{AuthStatus, LoginResult, ModeratorLogin};
use restartup::id::GameId;
use restartup::log;

use super::HandlerResult;
use crate::AppState;
use crate::cookies;
use crate::services::GameStore;

/// Tells a browser who it is for this game, going by its cookies.
pub async fn status(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
    headers: HeaderMap,
) -> HandlerResult<Json<AuthStatus>> {
    let players = state.games.players(&game_id).await?;
    // A cookie for a player the game no longer knows counts for nothing
    let player = cookies::player(&headers, &game_id)
        .filter(|player_id| players.contains_key(player_id))
        .map(|player_id| player_id.into_string())
        .unwrap_or_default();

    Ok(Json(AuthStatus {
        authorized: cookies::is_admin(&headers, &game_id),
        player,
    }))
}

/// Checks a moderator password and, if it matches, hands out the admin
/// cookie.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
    Json(request): Json<ModeratorLogin>,
) -> HandlerResult<Response> {
    let valid = state
        .games
        .check_password(&game_id, &request.password)
        .await?;
    let body = Json(LoginResult { valid });
    if !valid {
        log::warn!("Rejected moderator login for game {}", game_id);
        return Ok(body.into_response());
    }
    let cookie = cookies::admin_cookie(&game_id);
    Ok(([(SET_COOKIE, cookie)], body).into_response())
}
