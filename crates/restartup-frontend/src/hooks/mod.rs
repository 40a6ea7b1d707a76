//! Custom hooks for live data and viewer sessions.

pub mod use_polling;
pub mod use_session;

pub use use_polling::{Polled, use_polling};
pub use use_session::use_session;
