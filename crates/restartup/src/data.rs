//! Data structures exchanged with the game service.
//!
//! The service is loose about shapes: rounds may come back as `"Warmup"`,
//! the player collection is sometimes keyed by id and sometimes a list, and
//! optional attributes are simply missing. Everything is normalized here, on
//! receipt, so view code never branches on wire shape.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::{EventId, GameId, PlayerId};

/// A game round. Round 0 is the warmup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Round(pub u32);

impl Round {
    pub const WARMUP: Round = Round(0);

    pub fn is_warmup(&self) -> bool {
        self.0 == 0
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Round {
    /// ```
    /// use restartup::data::Round;
    ///
    /// assert_eq!(Round(0).to_string(), "Warmup");
    /// assert_eq!(Round(3).to_string(), "3");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_warmup() {
            write!(f, "Warmup")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Round {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Round {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRound {
            Number(u32),
            Text(String),
        }

        match RawRound::deserialize(deserializer)? {
            RawRound::Number(n) => Ok(Round(n)),
            RawRound::Text(text) if text.eq_ignore_ascii_case("warmup") => Ok(Round::WARMUP),
            RawRound::Text(text) => text
                .trim()
                .parse()
                .map(Round)
                .map_err(|_| serde::de::Error::custom(format!("invalid round: {text:?}"))),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Names of players flagged by the service as struggling.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AssistanceQueue {
    #[serde(default)]
    pub needs_assistance: Vec<String>,
    #[serde(default)]
    pub being_assisted: Vec<String>,
}

/// The state of one game as returned by `GET /{gameId}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Game {
    pub game_id: GameId,
    #[serde(default)]
    pub round: Round,
    #[serde(default)]
    pub paused: bool,
    #[serde(default = "default_true")]
    pub running: bool,
    #[serde(default)]
    pub auto_mode: bool,
    #[serde(default)]
    pub ended: bool,
    #[serde(default)]
    pub players: Vec<PlayerId>,
    #[serde(default)]
    pub players_to_assist: AssistanceQueue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_round: Option<u32>,
}

impl Game {
    /// The service reports a paused game either with an explicit flag or by
    /// clearing `running`.
    pub fn is_paused(&self) -> bool {
        self.paused || !self.running
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// A player in a game. Only the server mutates these.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    #[serde(default)]
    pub player_id: PlayerId,
    pub name: String,
    /// The callback URL questions are sent to.
    #[serde(default)]
    pub api: String,
    #[serde(default)]
    pub score: i64,
    /// Recent outcomes, oldest first: `1` correct, `X` wrong, `0` no response.
    #[serde(default)]
    pub streak: String,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub correct_tally: u32,
    #[serde(default)]
    pub incorrect_tally: u32,
    #[serde(default)]
    pub request_counts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_ratio: Option<f64>,
}

impl Player {
    /// Fraction of requests answered correctly, in `0.0..=1.0`.
    pub fn success_ratio(&self) -> f64 {
        match self.success_ratio {
            Some(ratio) => ratio,
            None if self.request_counts == 0 => 0.0,
            None => f64::from(self.correct_tally) / f64::from(self.request_counts),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlayerCollection {
    Keyed(BTreeMap<PlayerId, Player>),
    Listed(Vec<Player>),
}

impl PlayerCollection {
    fn into_players(self) -> Vec<Player> {
        match self {
            // The key is authoritative for the id
            PlayerCollection::Keyed(players) => players
                .into_iter()
                .map(|(player_id, mut player)| {
                    player.player_id = player_id;
                    player
                })
                .collect(),
            PlayerCollection::Listed(mut players) => {
                players.sort_by(|a, b| a.player_id.cmp(&b.player_id));
                players
            }
        }
    }
}

/// Response of `GET /{gameId}/players`, in any of the shapes the service
/// produces.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlayersPayload {
    Wrapped { players: PlayerCollection },
    Bare(PlayerCollection),
}

impl PlayersPayload {
    /// Normalizes the payload into a list ordered by player id.
    pub fn into_players(self) -> Vec<Player> {
        match self {
            PlayersPayload::Wrapped { players } | PlayersPayload::Bare(players) => {
                players.into_players()
            }
        }
    }
}

/// How a player's service answered a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    NoServerResponse,
    ErrorResponse,
    Wrong,
    Correct,
}

impl ResponseType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "NO_SERVER_RESPONSE" | "NO_RESPONSE" => Some(ResponseType::NoServerResponse),
            "ERROR_RESPONSE" => Some(ResponseType::ErrorResponse),
            "WRONG" => Some(ResponseType::Wrong),
            "CORRECT" => Some(ResponseType::Correct),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::NoServerResponse => "NO_SERVER_RESPONSE",
            ResponseType::ErrorResponse => "ERROR_RESPONSE",
            ResponseType::Wrong => "WRONG",
            ResponseType::Correct => "CORRECT",
        }
    }

    /// Errors and silence are shown the same way.
    pub fn is_no_response(&self) -> bool {
        matches!(
            self,
            ResponseType::NoServerResponse | ResponseType::ErrorResponse
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResponseType::NoServerResponse | ResponseType::ErrorResponse => "NO RESPONSE",
            ResponseType::Wrong => "INCORRECT",
            ResponseType::Correct => "CORRECT",
        }
    }
}

impl Serialize for ResponseType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Marker events such as "WARMUP_ENDED" carry an empty response type.
fn deserialize_outcome<'de, D>(deserializer: D) -> Result<Option<ResponseType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ResponseType::parse))
}

/// One query sent to a player, and what came of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawPlayerEvent")]
pub struct PlayerEvent {
    pub event_id: EventId,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub difficulty: u32,
    #[serde(default)]
    pub points_gained: i64,
    #[serde(default, deserialize_with = "deserialize_outcome")]
    pub response_type: Option<ResponseType>,
    #[serde(default)]
    pub timestamp: String,
    /// The player's score after this event.
    #[serde(default)]
    pub score: i64,
}

// Event rows read straight from storage are keyed by `player_event_id`; rows
// that went through the players listing carry `event_id` as well, or instead.
#[derive(Deserialize)]
struct RawPlayerEvent {
    #[serde(default)]
    event_id: Option<EventId>,
    #[serde(default)]
    player_event_id: Option<EventId>,
    #[serde(default)]
    query: String,
    #[serde(default)]
    difficulty: u32,
    #[serde(default)]
    points_gained: i64,
    #[serde(default, deserialize_with = "deserialize_outcome")]
    response_type: Option<ResponseType>,
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    score: i64,
}

impl From<RawPlayerEvent> for PlayerEvent {
    fn from(raw: RawPlayerEvent) -> Self {
        Self {
            event_id: raw
                .event_id
                .or(raw.player_event_id)
                .unwrap_or_default(),
            query: raw.query,
            difficulty: raw.difficulty,
            points_gained: raw.points_gained,
            response_type: raw.response_type,
            timestamp: raw.timestamp,
            score: raw.score,
        }
    }
}

/// Response of `GET /{gameId}/players/{playerId}/events`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EventsPayload {
    Wrapped { events: Vec<PlayerEvent> },
    Bare(Vec<PlayerEvent>),
}

impl EventsPayload {
    /// Events in the order the service sent them.
    pub fn into_events(self) -> Vec<PlayerEvent> {
        match self {
            EventsPayload::Wrapped { events } | EventsPayload::Bare(events) => events,
        }
    }
}

/// Response of `GET /{gameId}/auth`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AuthStatus {
    #[serde(default)]
    pub authorized: bool,
    /// Empty when the viewer has not joined as a player.
    #[serde(default)]
    pub player: String,
}

/// Response of a moderator login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResult {
    pub valid: bool,
}

/// Outcome strings returned by `PUT /{gameId}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    RoundIncremented,
    GameEnded,
    Paused,
    Unpaused,
    AutoOn,
    AutoOff,
    Assisting(String),
    Other(String),
}

impl GameUpdate {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ROUND_INCREMENTED" => GameUpdate::RoundIncremented,
            "GAME_ENDED" => GameUpdate::GameEnded,
            "GAME_PAUSED" => GameUpdate::Paused,
            "GAME_UNPAUSED" => GameUpdate::Unpaused,
            "GAME_AUTO_ON" => GameUpdate::AutoOn,
            "GAME_AUTO_OFF" => GameUpdate::AutoOff,
            other => match other.strip_prefix("ASSISTING ") {
                Some(name) => GameUpdate::Assisting(name.to_string()),
                None => GameUpdate::Other(other.to_string()),
            },
        }
    }

    pub fn as_wire(&self) -> String {
        match self {
            GameUpdate::RoundIncremented => "ROUND_INCREMENTED".to_string(),
            GameUpdate::GameEnded => "GAME_ENDED".to_string(),
            GameUpdate::Paused => "GAME_PAUSED".to_string(),
            GameUpdate::Unpaused => "GAME_UNPAUSED".to_string(),
            GameUpdate::AutoOn => "GAME_AUTO_ON".to_string(),
            GameUpdate::AutoOff => "GAME_AUTO_OFF".to_string(),
            GameUpdate::Assisting(name) => format!("ASSISTING {}", name.to_uppercase()),
            GameUpdate::Other(other) => other.clone(),
        }
    }
}

impl Serialize for GameUpdate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameUpdate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(GameUpdate::parse(&raw))
    }
}

// Request bodies for PUT /{gameId}. The service only looks at which key is
// present, and at the truthiness of its value.

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AdvanceRound {
    pub round: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SetPause {
    pub pause: String,
}

impl SetPause {
    pub fn new(paused: bool) -> Self {
        Self {
            pause: if paused { "p".to_string() } else { String::new() },
        }
    }

    pub fn is_pause(&self) -> bool {
        !self.pause.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SetAutoMode {
    pub auto: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EndGame {
    pub end: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssistPlayer {
    pub assisting: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateGame {
    pub password: String,
}

/// `POST /` response. The full game record comes back; the id is what matters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedGame {
    pub game_id: GameId,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JoinGame {
    pub name: String,
    pub api: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModeratorLogin {
    pub password: String,
}

// Post-game review artifacts

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReviewExisted {
    pub existed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FinalStanding {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub success_ratio: f64,
}

/// One point of the score history: a timestamp plus the score of whichever
/// players changed at that moment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunningTotal {
    pub time: String,
    #[serde(flatten)]
    pub scores: BTreeMap<PlayerId, i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Record {
    #[serde(default)]
    pub achieved_by_team: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StreakRecord {
    Count(f64),
    Detailed {
        #[serde(default)]
        correct_answers_in_a_row: f64,
        #[serde(default)]
        duration: f64,
        #[serde(default)]
        achieved_by_team: String,
    },
}

impl Default for StreakRecord {
    fn default() -> Self {
        StreakRecord::Count(0.0)
    }
}

impl StreakRecord {
    pub fn answers_in_a_row(&self) -> f64 {
        match self {
            StreakRecord::Count(count) => *count,
            StreakRecord::Detailed {
                correct_answers_in_a_row,
                ..
            } => *correct_answers_in_a_row,
        }
    }
}

/// A run of answers that moved a team up (comeback) or down (fail) the board.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Swing {
    #[serde(default)]
    pub achieved_by_team: String,
    #[serde(default, alias = "points_lost_during_that_streak")]
    pub points_gained_during_that_streak: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub start_position: i64,
    #[serde(default)]
    pub final_achieved_position: i64,
}

impl Swing {
    /// Places moved; positive when the team climbed.
    pub fn places_moved(&self) -> i64 {
        self.start_position - self.final_achieved_position
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GameStats {
    #[serde(default)]
    pub total_requests: f64,
    #[serde(default)]
    pub average_streak: f64,
    #[serde(default)]
    pub average_on_fire_duration: f64,
    #[serde(default)]
    pub longest_on_fire_duration: Record,
    #[serde(default)]
    pub longest_streak: StreakRecord,
    #[serde(default)]
    pub average_success_rate: f64,
    #[serde(default)]
    pub best_success_rate: Record,
    #[serde(default)]
    pub most_epic_comeback: Swing,
    #[serde(default)]
    pub most_epic_fail: Swing,
}

/// A notable moment of the game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KeyPoint {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_accepts_number_or_warmup() {
        let round: Round = serde_json::from_str("0").unwrap();
        assert!(round.is_warmup());

        let round: Round = serde_json::from_str("\"Warmup\"").unwrap();
        assert_eq!(round, Round::WARMUP);

        let round: Round = serde_json::from_str("4").unwrap();
        assert_eq!(round.to_string(), "4");

        assert!(serde_json::from_str::<Round>("\"soon\"").is_err());
    }

    #[test]
    fn test_round_zero_displays_warmup() {
        assert_eq!(Round(0).to_string(), "Warmup");
        for n in 1..20 {
            assert_eq!(Round(n).to_string(), n.to_string());
        }
    }

    #[test]
    fn test_game_defaults_and_pause() {
        let game: Game = serde_json::from_str(
            r#"{"game_id": "abcd1234", "round": 2, "running": false, "players": ["p1", "p2"]}"#,
        )
        .unwrap();
        assert_eq!(game.round, Round(2));
        assert!(game.is_paused());
        assert_eq!(game.player_count(), 2);
        assert!(game.players_to_assist.needs_assistance.is_empty());

        let game: Game = serde_json::from_str(r#"{"game_id": "abcd1234"}"#).unwrap();
        assert!(!game.is_paused());
        assert!(game.round.is_warmup());
    }

    #[test]
    fn test_keyed_players_take_id_from_key() {
        let payload: PlayersPayload = serde_json::from_str(
            r#"{"players": {
                "zz": {"name": "last", "score": 1},
                "aa": {"player_id": "stale", "name": "first", "score": 2}
            }}"#,
        )
        .unwrap();
        let players = payload.into_players();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].player_id.as_str(), "aa");
        assert_eq!(players[0].name, "first");
        assert_eq!(players[1].player_id.as_str(), "zz");
    }

    #[test]
    fn test_listed_players_are_ordered_by_id() {
        let payload: PlayersPayload = serde_json::from_str(
            r#"{"players": [
                {"player_id": "b2", "name": "two"},
                {"player_id": "a1", "name": "one"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<String> = payload
            .into_players()
            .into_iter()
            .map(|p| p.player_id.into_string())
            .collect();
        assert_eq!(ids, vec!["a1", "b2"]);

        let bare: PlayersPayload =
            serde_json::from_str(r#"[{"player_id": "x", "name": "solo"}]"#).unwrap();
        assert_eq!(bare.into_players().len(), 1);
    }

    #[test]
    fn test_success_ratio_falls_back_to_tallies() {
        let mut player: Player =
            serde_json::from_str(r#"{"name": "p", "correct_tally": 3, "request_counts": 4}"#)
                .unwrap();
        assert_eq!(player.success_ratio(), 0.75);

        player.request_counts = 0;
        assert_eq!(player.success_ratio(), 0.0);

        player.success_ratio = Some(0.5);
        assert_eq!(player.success_ratio(), 0.5);
    }

    #[test]
    fn test_events_with_marker_rows() {
        let payload: EventsPayload = serde_json::from_str(
            r#"{"events": [
                {"event_id": "e1", "query": "what is 1 + 1", "difficulty": 1, "points_gained": 10, "response_type": "CORRECT", "timestamp": "2023-03-01T10:00:00"},
                {"event_id": "e2", "query": "WARMUP_ENDED", "difficulty": 1, "points_gained": 0, "response_type": ""},
                {"event_id": "e3", "query": "q", "points_gained": -5, "response_type": "ERROR_RESPONSE"}
            ]}"#,
        )
        .unwrap();
        let events = payload.into_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].response_type, Some(ResponseType::Correct));
        assert_eq!(events[1].response_type, None);
        assert!(events[2].response_type.unwrap().is_no_response());
        assert_eq!(events[2].points_gained, -5);
    }

    #[test]
    fn test_events_keyed_by_storage_id() {
        let payload: EventsPayload = serde_json::from_str(
            r#"{"events": [
                {"game_id": "g1", "player_event_id": "abcd1234ef01", "score": 10, "query": "q", "difficulty": 1, "points_gained": 10, "response_type": "CORRECT", "timestamp": "2023-03-01T10:00:00"},
                {"game_id": "g1", "player_event_id": "abcd12349a9b", "player_id": "abcd1234", "event_id": "9a9b", "query": "q2", "response_type": "WRONG"},
                {"query": "WARMUP_ENDED", "response_type": ""}
            ]}"#,
        )
        .unwrap();
        let events = payload.into_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event_id.as_str(), "abcd1234ef01");
        assert_eq!(events[0].score, 10);
        assert_eq!(events[0].response_type, Some(ResponseType::Correct));
        assert_eq!(events[1].event_id.as_str(), "9a9b");
        assert!(events[2].event_id.is_empty());
    }

    #[test]
    fn test_game_update_strings() {
        assert_eq!(
            GameUpdate::parse("ROUND_INCREMENTED"),
            GameUpdate::RoundIncremented
        );
        assert_eq!(GameUpdate::parse("GAME_PAUSED"), GameUpdate::Paused);
        assert_eq!(
            GameUpdate::parse("ASSISTING WALTER"),
            GameUpdate::Assisting("WALTER".to_string())
        );
        assert!(matches!(
            GameUpdate::parse("walter not in needs_assistance list"),
            GameUpdate::Other(_)
        ));

        let parsed: GameUpdate = serde_json::from_str("\"GAME_UNPAUSED\"").unwrap();
        assert_eq!(parsed, GameUpdate::Unpaused);
    }

    #[test]
    fn test_pause_body() {
        assert_eq!(serde_json::to_string(&SetPause::new(true)).unwrap(), r#"{"pause":"p"}"#);
        assert_eq!(serde_json::to_string(&SetPause::new(false)).unwrap(), r#"{"pause":""}"#);
    }

    #[test]
    fn test_running_totals_flatten_scores() {
        let totals: Vec<RunningTotal> = serde_json::from_str(
            r#"[{"time": "2023-03-01T10:00:00"}, {"time": "2023-03-01T10:00:01", "p1": 10}]"#,
        )
        .unwrap();
        assert!(totals[0].scores.is_empty());
        assert_eq!(totals[1].scores.get(&PlayerId::from("p1")), Some(&10));
    }

    #[test]
    fn test_stats_accept_both_streak_shapes() {
        let stats: GameStats =
            serde_json::from_str(r#"{"total_requests": 12, "longest_streak": 10}"#).unwrap();
        assert_eq!(stats.longest_streak.answers_in_a_row(), 10.0);

        let stats: GameStats = serde_json::from_str(
            r#"{"longest_streak": {"correct_answers_in_a_row": 7, "duration": 3000}, "most_epic_fail": {"points_lost_during_that_streak": 3, "start_position": 3, "final_achieved_position": 20}}"#,
        )
        .unwrap();
        assert_eq!(stats.longest_streak.answers_in_a_row(), 7.0);
        assert_eq!(stats.most_epic_fail.points_gained_during_that_streak, 3.0);
        assert_eq!(stats.most_epic_fail.places_moved(), -17);
    }
}
