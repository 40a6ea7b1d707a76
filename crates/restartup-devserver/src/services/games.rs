use std::collections::BTreeMap;

use async_trait::async_trait;
use dashmap::DashMap;

use restartup::data::{
    AssistanceQueue, FinalStanding, Game, GameStats, GameUpdate, JoinGame, KeyPoint, Player,
    PlayerEvent, ResponseType, Round, RunningTotal,
};
use restartup::errors::FixtureError;
use restartup::id::{EventId, GameId, PlayerId};

use crate::ids;

/// A game service that keeps games, players and their events.
///
/// This is the contract the dev server's handlers rely on. It stores and
/// reports state; it does not score answers or ask questions.
#[async_trait]
pub trait GameStore {
    /// Creates a game guarded by the moderator `password`.
    async fn create(&self, password: &str) -> Result<Game, FixtureError>;

    /// Returns a game with its current player list.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::GameNotFound`] if no game has this id.
    async fn get(&self, game_id: &GameId) -> Result<Game, FixtureError>;

    async fn list(&self) -> Result<Vec<Game>, FixtureError>;

    async fn check_password(&self, game_id: &GameId, password: &str)
    -> Result<bool, FixtureError>;

    /// Registers a new player and assigns them an id.
    async fn join(&self, game_id: &GameId, join: JoinGame) -> Result<Player, FixtureError>;

    /// All players keyed by id.
    async fn players(&self, game_id: &GameId) -> Result<BTreeMap<PlayerId, Player>, FixtureError>;

    async fn player(&self, game_id: &GameId, player_id: &PlayerId)
    -> Result<Player, FixtureError>;

    async fn events(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<Vec<PlayerEvent>, FixtureError>;

    async fn event(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        event_id: &EventId,
    ) -> Result<PlayerEvent, FixtureError>;

    /// Appends an already judged event to a player's history and applies
    /// its points.
    async fn record_event(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        event: PlayerEvent,
    ) -> Result<PlayerEvent, FixtureError>;

    /// Moves to the next round. Past the last round the game ends instead.
    async fn advance_round(&self, game_id: &GameId) -> Result<GameUpdate, FixtureError>;

    async fn set_paused(&self, game_id: &GameId, paused: bool) -> Result<GameUpdate, FixtureError>;

    async fn set_auto_mode(&self, game_id: &GameId, auto: bool)
    -> Result<GameUpdate, FixtureError>;

    async fn end(&self, game_id: &GameId) -> Result<GameUpdate, FixtureError>;

    /// Flags a struggling player by name for assistance.
    async fn request_assistance(&self, game_id: &GameId, name: &str)
    -> Result<(), FixtureError>;

    /// Moves a player from the waiting list to the assisted list.
    async fn assist(&self, game_id: &GameId, name: &str) -> Result<GameUpdate, FixtureError>;

    async fn assistance(&self, game_id: &GameId) -> Result<AssistanceQueue, FixtureError>;

    async fn running_totals(&self, game_id: &GameId) -> Result<Vec<RunningTotal>, FixtureError>;

    /// Final standings, best score first.
    async fn final_board(&self, game_id: &GameId) -> Result<Vec<FinalStanding>, FixtureError>;

    async fn stats(&self, game_id: &GameId) -> Result<GameStats, FixtureError>;

    async fn key_points(&self, game_id: &GameId) -> Result<Vec<KeyPoint>, FixtureError>;

    /// Stores the post-game analysis, which the production service computes
    /// offline.
    async fn set_analysis(
        &self,
        game_id: &GameId,
        stats: GameStats,
        key_points: Vec<KeyPoint>,
    ) -> Result<(), FixtureError>;
}

/// How many outcomes a player's streak history keeps.
const STREAK_LENGTH: usize = 30;

/// Everything the store knows about one game.
#[derive(Debug, Clone)]
struct GameRecord {
    game: Game,
    password: String,
    players: BTreeMap<PlayerId, Player>,
    events: BTreeMap<PlayerId, Vec<PlayerEvent>>,
    running_totals: Vec<RunningTotal>,
    stats: GameStats,
    key_points: Vec<KeyPoint>,
}

impl GameRecord {
    fn new(game_id: GameId, password: &str) -> Self {
        let game = Game {
            game_id,
            round: Round::WARMUP,
            paused: false,
            running: true,
            auto_mode: false,
            ended: false,
            players: Vec::new(),
            players_to_assist: AssistanceQueue::default(),
            max_round: None,
        };
        Self {
            game,
            password: password.to_string(),
            players: BTreeMap::new(),
            events: BTreeMap::new(),
            running_totals: Vec::new(),
            stats: GameStats::default(),
            key_points: Vec::new(),
        }
    }

    fn snapshot(&self) -> Game {
        Game {
            players: self.players.keys().cloned().collect(),
            ..self.game.clone()
        }
    }

    fn player_mut(&mut self, player_id: &PlayerId) -> Result<&mut Player, FixtureError> {
        self.players
            .get_mut(player_id)
            .ok_or_else(|| FixtureError::PlayerNotFound(player_id.to_string()))
    }

    fn end(&mut self) -> GameUpdate {
        self.game.ended = true;
        self.game.running = false;
        GameUpdate::GameEnded
    }
}

fn streak_char(outcome: Option<ResponseType>) -> Option<char> {
    match outcome? {
        ResponseType::Correct => Some('1'),
        ResponseType::Wrong => Some('X'),
        ResponseType::NoServerResponse | ResponseType::ErrorResponse => Some('0'),
    }
}

fn trailing_correct(streak: &str) -> u32 {
    streak.chars().rev().take_while(|c| *c == '1').count() as u32
}

/// An in-memory implementation of the [`GameStore`] trait.
///
/// Games live in a `DashMap` and vanish with the process.
pub struct GameStoreInMemory {
    games: DashMap<GameId, GameRecord>,
}

impl GameStoreInMemory {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }

    fn read<T>(
        &self,
        game_id: &GameId,
        f: impl FnOnce(&GameRecord) -> Result<T, FixtureError>,
    ) -> Result<T, FixtureError> {
        let record = self
            .games
            .get(game_id)
            .ok_or_else(|| FixtureError::GameNotFound(game_id.to_string()))?;
        f(record.value())
    }

    fn write<T>(
        &self,
        game_id: &GameId,
        f: impl FnOnce(&mut GameRecord) -> Result<T, FixtureError>,
    ) -> Result<T, FixtureError> {
        let mut record = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| FixtureError::GameNotFound(game_id.to_string()))?;
        f(record.value_mut())
    }
}

impl Default for GameStoreInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameStore for GameStoreInMemory {
    async fn create(&self, password: &str) -> Result<Game, FixtureError> {
        if password.is_empty() {
            return Err(FixtureError::InvalidPassword);
        }
        let record = GameRecord::new(ids::game_id(), password);
        let game = record.snapshot();
        self.games.insert(game.game_id.clone(), record);
        Ok(game)
    }

    async fn get(&self, game_id: &GameId) -> Result<Game, FixtureError> {
        self.read(game_id, |record| Ok(record.snapshot()))
    }

    async fn list(&self) -> Result<Vec<Game>, FixtureError> {
        let mut games: Vec<Game> = self
            .games
            .iter()
            .map(|entry| entry.value().snapshot())
            .collect();
        games.sort_by(|a, b| a.game_id.cmp(&b.game_id));
        Ok(games)
    }

    async fn check_password(
        &self,
        game_id: &GameId,
        password: &str,
    ) -> Result<bool, FixtureError> {
        self.read(game_id, |record| Ok(record.password == password))
    }

    async fn join(&self, game_id: &GameId, join: JoinGame) -> Result<Player, FixtureError> {
        if join.name.trim().is_empty() || join.api.trim().is_empty() {
            return Err(FixtureError::InvalidRequest(
                "a name and a callback URL are required".to_string(),
            ));
        }
        self.write(game_id, |record| {
            let player = Player {
                player_id: ids::generate(),
                name: join.name.trim().to_string(),
                api: join.api.trim().to_string(),
                score: 0,
                streak: String::new(),
                longest_streak: 0,
                correct_tally: 0,
                incorrect_tally: 0,
                request_counts: 0,
                success_ratio: None,
            };
            record
                .players
                .insert(player.player_id.clone(), player.clone());
            record.events.insert(player.player_id.clone(), Vec::new());
            Ok(player)
        })
    }

    async fn players(&self, game_id: &GameId) -> Result<BTreeMap<PlayerId, Player>, FixtureError> {
        self.read(game_id, |record| Ok(record.players.clone()))
    }

    async fn player(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<Player, FixtureError> {
        self.read(game_id, |record| {
            record
                .players
                .get(player_id)
                .cloned()
                .ok_or_else(|| FixtureError::PlayerNotFound(player_id.to_string()))
        })
    }

    async fn events(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<Vec<PlayerEvent>, FixtureError> {
        self.read(game_id, |record| {
            record
                .events
                .get(player_id)
                .cloned()
                .ok_or_else(|| FixtureError::PlayerNotFound(player_id.to_string()))
        })
    }

    async fn event(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        event_id: &EventId,
    ) -> Result<PlayerEvent, FixtureError> {
        let events = self.events(game_id, player_id).await?;
        events
            .into_iter()
            .find(|event| &event.event_id == event_id)
            .ok_or_else(|| FixtureError::InvalidRequest(format!("no event {event_id}")))
    }

    async fn record_event(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        mut event: PlayerEvent,
    ) -> Result<PlayerEvent, FixtureError> {
        self.write(game_id, |record| {
            let player = record.player_mut(player_id)?;
            player.score += event.points_gained;
            player.request_counts += 1;
            match event.response_type {
                Some(ResponseType::Correct) => player.correct_tally += 1,
                Some(ResponseType::Wrong) => player.incorrect_tally += 1,
                _ => {}
            }
            if let Some(outcome) = streak_char(event.response_type) {
                player.streak.push(outcome);
                let excess = player.streak.len().saturating_sub(STREAK_LENGTH);
                player.streak.drain(..excess);
                player.longest_streak = player.longest_streak.max(trailing_correct(&player.streak));
            }
            if event.event_id.is_empty() {
                event.event_id = ids::generate();
            }
            event.score = player.score;

            let mut total = RunningTotal {
                time: event.timestamp.clone(),
                scores: BTreeMap::new(),
            };
            total.scores.insert(player_id.clone(), player.score);
            record.running_totals.push(total);
            record
                .events
                .entry(player_id.clone())
                .or_default()
                .push(event.clone());
            Ok(event)
        })
    }

    async fn advance_round(&self, game_id: &GameId) -> Result<GameUpdate, FixtureError> {
        self.write(game_id, |record| {
            if record.game.ended {
                return Ok(GameUpdate::GameEnded);
            }
            let next = record.game.round.number() + 1;
            if record.game.max_round.is_some_and(|max| next > max) {
                return Ok(record.end());
            }
            record.game.round = Round(next);
            Ok(GameUpdate::RoundIncremented)
        })
    }

    async fn set_paused(&self, game_id: &GameId, paused: bool) -> Result<GameUpdate, FixtureError> {
        self.write(game_id, |record| {
            record.game.paused = paused;
            Ok(if paused {
                GameUpdate::Paused
            } else {
                GameUpdate::Unpaused
            })
        })
    }

    async fn set_auto_mode(
        &self,
        game_id: &GameId,
        auto: bool,
    ) -> Result<GameUpdate, FixtureError> {
        self.write(game_id, |record| {
            record.game.auto_mode = auto;
            Ok(if auto {
                GameUpdate::AutoOn
            } else {
                GameUpdate::AutoOff
            })
        })
    }

    async fn end(&self, game_id: &GameId) -> Result<GameUpdate, FixtureError> {
        self.write(game_id, |record| Ok(record.end()))
    }

    async fn request_assistance(
        &self,
        game_id: &GameId,
        name: &str,
    ) -> Result<(), FixtureError> {
        self.write(game_id, |record| {
            let queue = &mut record.game.players_to_assist;
            if !queue.needs_assistance.iter().any(|waiting| waiting == name) {
                queue.needs_assistance.push(name.to_string());
            }
            Ok(())
        })
    }

    async fn assist(&self, game_id: &GameId, name: &str) -> Result<GameUpdate, FixtureError> {
        self.write(game_id, |record| {
            let queue = &mut record.game.players_to_assist;
            let position = queue
                .needs_assistance
                .iter()
                .position(|waiting| waiting.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    FixtureError::InvalidRequest(format!("{name} did not ask for assistance"))
                })?;
            let name = queue.needs_assistance.remove(position);
            queue.being_assisted.push(name.clone());
            Ok(GameUpdate::Assisting(name))
        })
    }

    async fn assistance(&self, game_id: &GameId) -> Result<AssistanceQueue, FixtureError> {
        self.read(game_id, |record| Ok(record.game.players_to_assist.clone()))
    }

    async fn running_totals(&self, game_id: &GameId) -> Result<Vec<RunningTotal>, FixtureError> {
        self.read(game_id, |record| Ok(record.running_totals.clone()))
    }

    async fn final_board(&self, game_id: &GameId) -> Result<Vec<FinalStanding>, FixtureError> {
        self.read(game_id, |record| {
            let mut standings: Vec<FinalStanding> = record
                .players
                .values()
                .map(|player| FinalStanding {
                    player_id: player.player_id.clone(),
                    name: player.name.clone(),
                    score: player.score,
                    longest_streak: player.longest_streak,
                    success_ratio: player.success_ratio(),
                })
                .collect();
            standings.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| a.player_id.cmp(&b.player_id))
            });
            Ok(standings)
        })
    }

    async fn stats(&self, game_id: &GameId) -> Result<GameStats, FixtureError> {
        self.read(game_id, |record| {
            Ok(GameStats {
                total_requests: record
                    .players
                    .values()
                    .map(|player| f64::from(player.request_counts))
                    .sum(),
                ..record.stats.clone()
            })
        })
    }

    async fn key_points(&self, game_id: &GameId) -> Result<Vec<KeyPoint>, FixtureError> {
        self.read(game_id, |record| Ok(record.key_points.clone()))
    }

    async fn set_analysis(
        &self,
        game_id: &GameId,
        stats: GameStats,
        key_points: Vec<KeyPoint>,
    ) -> Result<(), FixtureError> {
        self.write(game_id, |record| {
            record.stats = stats;
            record.key_points = key_points;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_request(name: &str) -> JoinGame {
        JoinGame {
            name: name.to_string(),
            api: format!("http://{name}.local:8000"),
        }
    }

    fn answered(outcome: ResponseType, points: i64) -> PlayerEvent {
        PlayerEvent {
            event_id: EventId::default(),
            query: "what is 1 plus 1".to_string(),
            difficulty: 1,
            points_gained: points,
            response_type: Some(outcome),
            timestamp: "2024-01-01T10:00:00".to_string(),
            score: 0,
        }
    }

    #[tokio::test]
    async fn test_create_and_join() {
        let store = GameStoreInMemory::new();
        let game = store.create("secret").await.unwrap();
        assert_eq!(game.round, Round::WARMUP);
        assert!(store.check_password(&game.game_id, "secret").await.unwrap());
        assert!(!store.check_password(&game.game_id, "nope").await.unwrap());

        let player = store.join(&game.game_id, join_request("alice")).await.unwrap();
        let game = store.get(&game.game_id).await.unwrap();
        assert_eq!(game.players, vec![player.player_id.clone()]);
        assert_eq!(
            store.player(&game.game_id, &player.player_id).await.unwrap().name,
            "alice"
        );
    }

    #[tokio::test]
    async fn test_unknown_ids() {
        let store = GameStoreInMemory::new();
        let missing = GameId::from("missing");
        assert_eq!(
            store.get(&missing).await,
            Err(FixtureError::GameNotFound("missing".to_string()))
        );

        let game = store.create("secret").await.unwrap();
        let result = store.player(&game.game_id, &PlayerId::from("ghost")).await;
        assert_eq!(result, Err(FixtureError::PlayerNotFound("ghost".to_string())));
    }

    #[tokio::test]
    async fn test_round_and_pause_updates() {
        let store = GameStoreInMemory::new();
        let game_id = store.create("secret").await.unwrap().game_id;

        assert_eq!(
            store.advance_round(&game_id).await.unwrap(),
            GameUpdate::RoundIncremented
        );
        assert_eq!(store.get(&game_id).await.unwrap().round, Round(1));

        assert_eq!(store.set_paused(&game_id, true).await.unwrap(), GameUpdate::Paused);
        assert!(store.get(&game_id).await.unwrap().is_paused());
        assert_eq!(
            store.set_paused(&game_id, false).await.unwrap(),
            GameUpdate::Unpaused
        );
        assert_eq!(
            store.set_auto_mode(&game_id, true).await.unwrap(),
            GameUpdate::AutoOn
        );

        assert_eq!(store.end(&game_id).await.unwrap(), GameUpdate::GameEnded);
        assert_eq!(
            store.advance_round(&game_id).await.unwrap(),
            GameUpdate::GameEnded
        );
    }

    #[tokio::test]
    async fn test_recorded_events_update_player() {
        let store = GameStoreInMemory::new();
        let game_id = store.create("secret").await.unwrap().game_id;
        let player_id = store.join(&game_id, join_request("bob")).await.unwrap().player_id;

        for (outcome, points) in [
            (ResponseType::Correct, 10),
            (ResponseType::Correct, 10),
            (ResponseType::Wrong, -5),
            (ResponseType::NoServerResponse, -20),
        ] {
            store
                .record_event(&game_id, &player_id, answered(outcome, points))
                .await
                .unwrap();
        }

        let player = store.player(&game_id, &player_id).await.unwrap();
        assert_eq!(player.score, -5);
        assert_eq!(player.streak, "11X0");
        assert_eq!(player.longest_streak, 2);
        assert_eq!(player.request_counts, 4);
        assert_eq!(player.correct_tally, 2);

        let events = store.events(&game_id, &player_id).await.unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[3].score, -5);
        let fetched = store
            .event(&game_id, &player_id, &events[0].event_id)
            .await
            .unwrap();
        assert_eq!(fetched, events[0]);

        assert_eq!(store.running_totals(&game_id).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_streak_history_is_capped() {
        let store = GameStoreInMemory::new();
        let game_id = store.create("secret").await.unwrap().game_id;
        let player_id = store.join(&game_id, join_request("carol")).await.unwrap().player_id;

        for _ in 0..(STREAK_LENGTH + 5) {
            store
                .record_event(&game_id, &player_id, answered(ResponseType::Correct, 1))
                .await
                .unwrap();
        }

        let player = store.player(&game_id, &player_id).await.unwrap();
        assert_eq!(player.streak.len(), STREAK_LENGTH);
        assert_eq!(player.longest_streak as usize, STREAK_LENGTH);
    }

    #[tokio::test]
    async fn test_assistance_queue() {
        let store = GameStoreInMemory::new();
        let game_id = store.create("secret").await.unwrap().game_id;

        store.request_assistance(&game_id, "dave").await.unwrap();
        store.request_assistance(&game_id, "dave").await.unwrap();
        assert_eq!(
            store.assistance(&game_id).await.unwrap().needs_assistance,
            vec!["dave".to_string()]
        );

        assert_eq!(
            store.assist(&game_id, "DAVE").await.unwrap(),
            GameUpdate::Assisting("dave".to_string())
        );
        let queue = store.assistance(&game_id).await.unwrap();
        assert!(queue.needs_assistance.is_empty());
        assert_eq!(queue.being_assisted, vec!["dave".to_string()]);
        assert!(store.assist(&game_id, "dave").await.is_err());
    }

    #[tokio::test]
    async fn test_final_board_order() {
        let store = GameStoreInMemory::new();
        let game_id = store.create("secret").await.unwrap().game_id;
        let low = store.join(&game_id, join_request("low")).await.unwrap().player_id;
        let high = store.join(&game_id, join_request("high")).await.unwrap().player_id;

        store
            .record_event(&game_id, &high, answered(ResponseType::Correct, 50))
            .await
            .unwrap();
        store
            .record_event(&game_id, &low, answered(ResponseType::Wrong, -10))
            .await
            .unwrap();

        let board = store.final_board(&game_id).await.unwrap();
        let names: Vec<&str> = board.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["high", "low"]);
        assert_eq!(board[0].success_ratio, 1.0);
        assert_eq!(store.stats(&game_id).await.unwrap().total_requests, 2.0);
    }
}
