//! Page components for the application's routes.

pub mod admin;
pub mod game;
pub mod home;
pub mod leaderboard;
pub mod not_found;
pub mod player;
pub mod players;
pub mod review;

pub use admin::*;
pub use game::*;
pub use home::*;
pub use leaderboard::*;
pub use not_found::*;
pub use player::*;
pub use players::*;
pub use review::*;
