//! The shared library for Restartup, the browser client for a live
//! Extreme Startup style quiz game.
//!
//! This library holds everything the frontend and the development fixture
//! server agree on: identifiers, wire data types, endpoint paths, the HTTP
//! API client, and the pure view derivations (leaderboard ordering, streak
//! bands, access guard, polling gate, review timelines). It also carries the
//! shared error types, logging setup and macros.

pub mod api;
pub mod data;
pub mod endpoints;
pub mod errors;
pub mod id;
pub mod leaderboard;
pub mod log;
pub mod macros;
pub mod poll;
pub mod review;
pub mod session;

pub use serde;
pub use serde_json;
pub use tracing;
