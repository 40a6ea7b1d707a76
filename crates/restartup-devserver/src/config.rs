//! Runtime configuration, read from the environment.

use std::net::SocketAddr;

use restartup::errors::Report;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3030";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevServerConfig {
    /// Where the server listens.
    pub addr: SocketAddr,
    /// Whether to start with a finished demo game loaded.
    pub seed: bool,
}

impl DevServerConfig {
    /// Reads `RESTARTUP_DEVSERVER_ADDR` and `RESTARTUP_DEVSERVER_SEED`.
    ///
    /// Seeding defaults to on in debug builds.
    pub fn from_env() -> Result<Self, Report> {
        Self::from_vars(
            std::env::var("RESTARTUP_DEVSERVER_ADDR").ok(),
            std::env::var("RESTARTUP_DEVSERVER_SEED").ok(),
        )
    }

    fn from_vars(addr: Option<String>, seed: Option<String>) -> Result<Self, Report> {
        let addr = addr.as_deref().unwrap_or(DEFAULT_ADDR).parse()?;
        let seed = match seed.as_deref().map(str::trim) {
            None => cfg!(debug_assertions),
            Some(flag) => matches!(flag, "1" | "true" | "yes" | "on"),
        };
        Ok(Self { addr, seed })
    }
}
