//! Leaderboard derivation.
//!
//! Turns the player list into display rows: ordered by score, flagged when a
//! player is on fire, and with their recent outcomes split into colored
//! streak cells. Nothing here mutates player data.

use std::cmp::Ordering;

use crate::data::Player;

/// A player is on fire once their longest streak reaches this many correct
/// answers in a row.
pub const DEFAULT_ON_FIRE_THRESHOLD: u32 = 3;

/// How many recent outcomes the streak bar shows. Matches the length of the
/// outcome history the game service keeps.
pub const DEFAULT_STREAK_WINDOW: usize = 30;

/// Ordered `(upper bound, color)` table used to color streak cells.
pub const DEFAULT_STREAK_BANDS: [StreakBand; 3] = [
    StreakBand::new(0, StreakColor::Red),
    StreakBand::new(1, StreakColor::Orange),
    StreakBand::new(2, StreakColor::Green),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreakColor {
    Red,
    Orange,
    Green,
}

impl StreakColor {
    /// CSS color name.
    pub fn css(&self) -> &'static str {
        match self {
            StreakColor::Red => "red",
            StreakColor::Orange => "orange",
            StreakColor::Green => "green",
        }
    }
}

/// Cells whose rank is at most `upper_bound` get `color`, unless an earlier
/// band already claimed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakBand {
    pub upper_bound: u8,
    pub color: StreakColor,
}

impl StreakBand {
    pub const fn new(upper_bound: u8, color: StreakColor) -> Self {
        Self { upper_bound, color }
    }
}

/// Picks the first band whose upper bound covers `rank`. Ranks above every
/// band fall into the last one.
pub fn classify(rank: u8, bands: &[StreakBand]) -> Option<StreakColor> {
    bands
        .iter()
        .find(|band| rank <= band.upper_bound)
        .or_else(|| bands.last())
        .map(|band| band.color)
}

/// Rank of one outcome character of a player's streak history: no response
/// (`0`) ranks lowest, a wrong answer (`X`) next, a correct answer (`1`)
/// highest.
pub fn outcome_rank(outcome: char) -> Option<u8> {
    match outcome {
        '0' => Some(0),
        'X' | 'x' => Some(1),
        '1' => Some(2),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardConfig {
    pub on_fire_threshold: u32,
    pub streak_window: usize,
    pub bands: Vec<StreakBand>,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            on_fire_threshold: DEFAULT_ON_FIRE_THRESHOLD,
            streak_window: DEFAULT_STREAK_WINDOW,
            bands: DEFAULT_STREAK_BANDS.to_vec(),
        }
    }
}

impl LeaderboardConfig {
    pub fn is_on_fire(&self, player: &Player) -> bool {
        player.longest_streak >= self.on_fire_threshold
    }
}

/// The last `window` outcomes of a streak history, oldest first, as colors.
/// Characters that are not outcomes are skipped.
pub fn streak_cells(streak: &str, config: &LeaderboardConfig) -> Vec<StreakColor> {
    let cells: Vec<StreakColor> = streak
        .chars()
        .filter_map(outcome_rank)
        .filter_map(|rank| classify(rank, &config.bands))
        .collect();
    let skip = cells.len().saturating_sub(config.streak_window);
    cells.into_iter().skip(skip).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    /// 1-based position on the board.
    pub position: usize,
    pub player: Player,
    pub on_fire: bool,
    pub streak: Vec<StreakColor>,
}

/// Score descending, then player id ascending so tied rows keep their place
/// between polls.
pub fn compare_standing(a: &Player, b: &Player) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.player_id.cmp(&b.player_id))
}

/// Projects the players into leaderboard rows.
pub fn derive(players: &[Player], config: &LeaderboardConfig) -> Vec<LeaderboardRow> {
    let mut ordered: Vec<&Player> = players.iter().collect();
    ordered.sort_by(|a, b| compare_standing(a, b));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, player)| LeaderboardRow {
            position: index + 1,
            on_fire: config.is_on_fire(player),
            streak: streak_cells(&player.streak, config),
            player: player.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PlayersPayload;

    fn player(id: &str, score: i64, longest_streak: u32) -> Player {
        Player {
            player_id: id.into(),
            name: format!("name-{id}"),
            api: String::new(),
            score,
            streak: String::new(),
            longest_streak,
            correct_tally: 0,
            incorrect_tally: 0,
            request_counts: 0,
            success_ratio: None,
        }
    }

    #[test]
    fn test_fixture_order() {
        let payload: PlayersPayload = serde_json::from_str(
            r#"{"players": {
                "p1": {"name": "player1", "api": "mock_walter", "score": -10, "streak": "", "longest_streak": 0},
                "p2": {"name": "player2", "api": "mock_jesse", "score": 420, "streak": "0X1", "longest_streak": 2},
                "p3": {"name": "player3", "api": "mock_saul", "score": 21, "streak": "111", "longest_streak": 3}
            }}"#,
        )
        .unwrap();
        let players = payload.into_players();
        let rows = derive(&players, &LeaderboardConfig::default());

        let names: Vec<&str> = rows.iter().map(|r| r.player.name.as_str()).collect();
        assert_eq!(names, vec!["player2", "player3", "player1"]);
        let scores: Vec<i64> = rows.iter().map(|r| r.player.score).collect();
        assert_eq!(scores, vec![420, 21, -10]);

        assert!(!rows[0].on_fire);
        assert!(rows[1].on_fire);
        assert_eq!(
            rows[0].streak,
            vec![StreakColor::Red, StreakColor::Orange, StreakColor::Green]
        );
    }

    #[test]
    fn test_sorted_by_score_then_id() {
        let players = vec![
            player("c", 5, 0),
            player("a", 5, 0),
            player("b", 10, 0),
            player("d", -3, 0),
            player("e", 5, 0),
        ];
        let rows = derive(&players, &LeaderboardConfig::default());

        assert_eq!(rows.len(), players.len());
        let ids: Vec<&str> = rows.iter().map(|r| r.player.player_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c", "e", "d"]);
        for pair in rows.windows(2) {
            assert_ne!(
                compare_standing(&pair[0].player, &pair[1].player),
                Ordering::Greater
            );
        }
        let positions: Vec<usize> = rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_board() {
        assert!(derive(&[], &LeaderboardConfig::default()).is_empty());
    }

    #[test]
    fn test_on_fire_threshold_boundary() {
        let config = LeaderboardConfig::default();
        for longest in 0..10 {
            let on_fire = config.is_on_fire(&player("p", 0, longest));
            assert_eq!(on_fire, longest >= DEFAULT_ON_FIRE_THRESHOLD);
        }

        let strict = LeaderboardConfig {
            on_fire_threshold: 5,
            ..LeaderboardConfig::default()
        };
        assert!(!strict.is_on_fire(&player("p", 0, 4)));
        assert!(strict.is_on_fire(&player("p", 0, 5)));
    }

    #[test]
    fn test_band_table_lookup() {
        let bands = DEFAULT_STREAK_BANDS;
        assert_eq!(classify(0, &bands), Some(StreakColor::Red));
        assert_eq!(classify(1, &bands), Some(StreakColor::Orange));
        assert_eq!(classify(2, &bands), Some(StreakColor::Green));
        assert_eq!(classify(9, &bands), Some(StreakColor::Green));
        assert_eq!(classify(0, &[]), None);

        let two_bands = [
            StreakBand::new(1, StreakColor::Red),
            StreakBand::new(2, StreakColor::Green),
        ];
        assert_eq!(classify(1, &two_bands), Some(StreakColor::Red));
    }

    #[test]
    fn test_streak_window_keeps_most_recent() {
        let config = LeaderboardConfig {
            streak_window: 2,
            ..LeaderboardConfig::default()
        };
        assert_eq!(
            streak_cells("00X1", &config),
            vec![StreakColor::Orange, StreakColor::Green]
        );
        assert_eq!(streak_cells("1", &config), vec![StreakColor::Green]);
        assert!(streak_cells("", &config).is_empty());
        assert_eq!(streak_cells("1?0", &config), vec![StreakColor::Green, StreakColor::Red]);
    }

    #[test]
    fn test_css_colors() {
        assert_eq!(StreakColor::Red.css(), "red");
        assert_eq!(StreakColor::Orange.css(), "orange");
        assert_eq!(StreakColor::Green.css(), "green");
    }
}
