use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use restartup::log;

use crate::AppState;
use crate::services::GameStore;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Debug, Serialize)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub games: usize,
}

fn human_readable(uptime: TimeDelta) -> String {
    let total = uptime.num_seconds();
    let days = uptime.num_days();
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn uptime(started_at: DateTime<Utc>) -> UptimeInfo {
    let elapsed = Utc::now().signed_duration_since(started_at);
    UptimeInfo {
        seconds: elapsed.num_seconds(),
        human: human_readable(elapsed),
    }
}

pub async fn get(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let games = state.games.list().await.unwrap_or_default().len();

    let response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: uptime(state.started_at),
        games,
    };

    log::debug!("Health check: {:?}", response);

    Json(response)
}
