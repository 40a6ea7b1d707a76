//! Post-game artifacts. The store only serves what it was given; the
//! analysis itself is never computed here.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use restartup::data::{FinalStanding, GameStats, KeyPoint, ReviewExisted, RunningTotal};
use restartup::id::GameId;

use super::HandlerResult;
use crate::AppState;
use crate::services::GameStore;

/// Unknown games are reported as not having existed rather than as an error.
pub async fn existed(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
) -> Json<ReviewExisted> {
    let existed = state.games.get(&game_id).await.is_ok();
    Json(ReviewExisted { existed })
}

pub async fn running_totals(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
) -> HandlerResult<Json<Vec<RunningTotal>>> {
    Ok(Json(state.games.running_totals(&game_id).await?))
}

pub async fn final_board(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
) -> HandlerResult<Json<Vec<FinalStanding>>> {
    Ok(Json(state.games.final_board(&game_id).await?))
}

pub async fn stats(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
) -> HandlerResult<Json<GameStats>> {
    Ok(Json(state.games.stats(&game_id).await?))
}

pub async fn analysis(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<GameId>,
) -> HandlerResult<Json<Vec<KeyPoint>>> {
    Ok(Json(state.games.key_points(&game_id).await?))
}
