//! Build-time configuration of the frontend.

use std::time::Duration;

use restartup::leaderboard::LeaderboardConfig;
use restartup::poll::DEFAULT_POLL_INTERVAL;

/// Base address of the game service, baked in at build time from
/// `RESTARTUP_API_URL`.
pub const API_BASE_URL: &str = match option_env!("RESTARTUP_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:3030",
};

pub const POLL_INTERVAL: Duration = DEFAULT_POLL_INTERVAL;

/// Poll interval in the unit `gloo-timers` expects.
pub fn poll_interval_millis() -> u32 {
    u32::try_from(POLL_INTERVAL.as_millis()).unwrap_or(u32::MAX)
}

pub fn leaderboard() -> LeaderboardConfig {
    LeaderboardConfig::default()
}
