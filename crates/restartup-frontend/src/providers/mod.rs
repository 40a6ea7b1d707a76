//! Services shared by pages and components.

pub mod api;

pub use api::{Api, use_api};
