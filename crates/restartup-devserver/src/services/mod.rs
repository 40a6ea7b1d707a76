//! The game service behind the development server.
//!
//! [`GameStore`] is what the HTTP handlers talk to. The only implementation
//! keeps everything in memory, which is all a local frontend needs.

pub mod games;

pub use games::*;
