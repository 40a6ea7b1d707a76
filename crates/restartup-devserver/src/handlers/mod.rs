//! HTTP handlers of the game service routes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use restartup::errors::FixtureError;
use restartup::log;

pub mod auth;
pub mod games;
pub mod health;
pub mod players;
pub mod review;

/// A [`FixtureError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct Failure(pub FixtureError);

impl From<FixtureError> for Failure {
    fn from(err: FixtureError) -> Self {
        Failure(err)
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        log::debug!("Request failed with {}: {}", status, self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub type HandlerResult<T> = Result<T, Failure>;
