//! A demo game to click through without running real player services.

use restartup::data::{
    GameStats, JoinGame, KeyPoint, PlayerEvent, Record, ResponseType, StreakRecord, Swing,
};
use restartup::errors::FixtureError;
use restartup::id::{EventId, GameId};

use crate::services::GameStore;

pub const DEMO_PASSWORD: &str = "demo";

const DEMO_PLAYERS: [(&str, &str); 3] = [
    ("walter", "http://localhost:9001"),
    ("jesse", "http://localhost:9002"),
    ("saul", "http://localhost:9003"),
];

// (player index, query, difficulty, points, outcome)
const DEMO_ANSWERS: [(usize, &str, u32, i64, ResponseType); 9] = [
    (0, "what is your name", 1, 10, ResponseType::Correct),
    (1, "what is your name", 1, 10, ResponseType::Correct),
    (2, "what is your name", 1, -10, ResponseType::NoServerResponse),
    (0, "what is 12 plus 30", 2, 20, ResponseType::Correct),
    (1, "what is 12 plus 30", 2, -20, ResponseType::Wrong),
    (2, "what is 12 plus 30", 2, 20, ResponseType::Correct),
    (0, "which of 4, 9, 16 are squares", 3, 30, ResponseType::Correct),
    (1, "which of 4, 9, 16 are squares", 3, -30, ResponseType::ErrorResponse),
    (2, "which of 4, 9, 16 are squares", 3, 30, ResponseType::Correct),
];

/// Loads a game two rounds in, with answered queries, a player waiting for
/// help and a precomputed analysis. Returns its id.
pub async fn demo_game<S>(store: &S) -> Result<GameId, FixtureError>
where
    S: GameStore + Sync,
{
    let game_id = store.create(DEMO_PASSWORD).await?.game_id;

    let mut players = Vec::with_capacity(DEMO_PLAYERS.len());
    for (name, api) in DEMO_PLAYERS {
        let join = JoinGame {
            name: name.to_string(),
            api: api.to_string(),
        };
        players.push(store.join(&game_id, join).await?);
    }

    for (second, (index, query, difficulty, points, outcome)) in
        DEMO_ANSWERS.into_iter().enumerate()
    {
        let event = PlayerEvent {
            event_id: EventId::default(),
            query: query.to_string(),
            difficulty,
            points_gained: points,
            response_type: Some(outcome),
            timestamp: format!("2024-03-01T10:00:{second:02}"),
            score: 0,
        };
        store
            .record_event(&game_id, &players[index].player_id, event)
            .await?;
    }

    store.advance_round(&game_id).await?;
    store.advance_round(&game_id).await?;
    store.request_assistance(&game_id, "jesse").await?;

    let stats = GameStats {
        average_streak: 1.3,
        average_on_fire_duration: 4.0,
        longest_on_fire_duration: Record {
            achieved_by_team: "walter".to_string(),
            value: 6.0,
        },
        longest_streak: StreakRecord::Detailed {
            correct_answers_in_a_row: 3.0,
            duration: 6.0,
            achieved_by_team: "walter".to_string(),
        },
        average_success_rate: 0.56,
        best_success_rate: Record {
            achieved_by_team: "walter".to_string(),
            value: 1.0,
        },
        most_epic_comeback: Swing {
            achieved_by_team: "saul".to_string(),
            points_gained_during_that_streak: 50.0,
            duration: 3.0,
            start_position: 3,
            final_achieved_position: 2,
        },
        most_epic_fail: Swing {
            achieved_by_team: "jesse".to_string(),
            points_gained_during_that_streak: 50.0,
            duration: 3.0,
            start_position: 1,
            final_achieved_position: 3,
        },
        ..GameStats::default()
    };
    let key_points = vec![
        KeyPoint {
            title: "First blood".to_string(),
            description: "walter answered the first query".to_string(),
            player_id: players[0].player_id.to_string(),
            timestamp: "2024-03-01T10:00:00".to_string(),
        },
        KeyPoint {
            title: "Server down".to_string(),
            description: "jesse stopped responding in round 2".to_string(),
            player_id: players[1].player_id.to_string(),
            timestamp: "2024-03-01T10:00:07".to_string(),
        },
    ];
    store.set_analysis(&game_id, stats, key_points).await?;

    Ok(game_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::GameStoreInMemory;
    use restartup::data::Round;

    #[tokio::test]
    async fn test_demo_game_contents() {
        let store = GameStoreInMemory::new();
        let game_id = demo_game(&store).await.unwrap();

        let game = store.get(&game_id).await.unwrap();
        assert_eq!(game.round, Round(2));
        assert_eq!(game.player_count(), 3);
        assert_eq!(
            game.players_to_assist.needs_assistance,
            vec!["jesse".to_string()]
        );
        assert!(store.check_password(&game_id, DEMO_PASSWORD).await.unwrap());

        let board = store.final_board(&game_id).await.unwrap();
        assert_eq!(board[0].name, "walter");
        assert_eq!(board[0].score, 60);

        assert_eq!(
            store.running_totals(&game_id).await.unwrap().len(),
            DEMO_ANSWERS.len()
        );
        assert_eq!(store.key_points(&game_id).await.unwrap().len(), 2);
        assert_eq!(store.stats(&game_id).await.unwrap().total_requests, 9.0);
    }
}
