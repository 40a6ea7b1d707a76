//! Paths of the game service resources.
//!
//! Everything here is plain string construction; the [`crate::api`] client
//! prepends its base address.

use crate::id::{EventId, GameId, PlayerId};

/// The post-game artifacts served under `/{gameId}/review/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewArtifact {
    Existed,
    FinalGraph,
    FinalBoard,
    Stats,
    Analysis,
}

impl ReviewArtifact {
    pub fn segment(&self) -> &'static str {
        match self {
            ReviewArtifact::Existed => "existed",
            ReviewArtifact::FinalGraph => "finalgraph",
            ReviewArtifact::FinalBoard => "finalboard",
            ReviewArtifact::Stats => "stats",
            ReviewArtifact::Analysis => "analysis",
        }
    }
}

/// All games.
pub fn games() -> String {
    "/".to_string()
}

pub fn game(game_id: &GameId) -> String {
    format!("/{game_id}")
}

/// Session and role resolution for a game.
pub fn auth(game_id: &GameId) -> String {
    format!("/{game_id}/auth")
}

pub fn players(game_id: &GameId) -> String {
    format!("/{game_id}/players")
}

pub fn player(game_id: &GameId, player_id: &PlayerId) -> String {
    format!("/{game_id}/players/{player_id}")
}

pub fn player_events(game_id: &GameId, player_id: &PlayerId) -> String {
    format!("/{game_id}/players/{player_id}/events")
}

pub fn player_event(game_id: &GameId, player_id: &PlayerId, event_id: &EventId) -> String {
    format!("/{game_id}/players/{player_id}/events/{event_id}")
}

pub fn assist(game_id: &GameId) -> String {
    format!("/{game_id}/assist")
}

pub fn scores(game_id: &GameId) -> String {
    format!("/{game_id}/scores")
}

pub fn review(game_id: &GameId, artifact: ReviewArtifact) -> String {
    format!("/{game_id}/review/{}", artifact.segment())
}

/// Joins a base address and a path without doubling or dropping the slash.
///
/// ```
/// use restartup::endpoints::url;
///
/// assert_eq!(url("http://localhost:3030/", "/abc/players"), "http://localhost:3030/abc/players");
/// assert_eq!(url("http://localhost:3030", "abc"), "http://localhost:3030/abc");
/// ```
pub fn url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
