//! Error types shared by the frontend and the dev server.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures of the fixture game service behind the development server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("Game {0} not found")]
    GameNotFound(String),
    #[error("Player {0} not found")]
    PlayerNotFound(String),
    #[error("Invalid moderator password")]
    InvalidPassword,
    #[error("Moderator access required")]
    NotModerator,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl FixtureError {
    /// HTTP status the game service answers with. Unknown games and players
    /// are reported as `406 Not Acceptable`.
    pub fn status_code(&self) -> u16 {
        match self {
            FixtureError::GameNotFound(_) | FixtureError::PlayerNotFound(_) => 406,
            FixtureError::InvalidPassword | FixtureError::NotModerator => 401,
            FixtureError::InvalidRequest(_) => 400,
        }
    }
}
