//! Reusable UI components for the Restartup frontend.
//!
//! Tables and badges for live game data, the game menu, and the pieces of
//! the post-game review.

pub mod copy_button;
pub mod final_board;
pub mod final_chart;
pub mod game_stats;
pub mod key_points;
pub mod leaderboard_table;
pub mod loading;
pub mod nav_menu;
pub mod player_event_table;
pub mod streak_bar;

pub use copy_button::*;
pub use final_board::*;
pub use final_chart::*;
pub use game_stats::*;
pub use key_points::*;
pub use leaderboard_table::*;
pub use loading::*;
pub use nav_menu::*;
pub use player_event_table::*;
pub use streak_bar::*;
