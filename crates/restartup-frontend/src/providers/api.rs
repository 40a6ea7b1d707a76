use restartup::api::{ApiClient, ApiResult, HttpApiClient};
use restartup::data::{
    AdvanceRound, AssistPlayer, AssistanceQueue, AuthStatus, CreateGame, CreatedGame, EndGame,
    EventsPayload, FinalStanding, Game, GameStats, GameUpdate, JoinGame, KeyPoint, LoginResult,
    ModeratorLogin, Player, PlayerEvent, PlayersPayload, ReviewExisted, RunningTotal,
    SetAutoMode, SetPause,
};
use restartup::endpoints::{self, ReviewArtifact};
use restartup::id::{GameId, PlayerId};
use restartup::session::Role;
use yew::prelude::*;

use crate::config;

/// Typed access to the game service. Every call goes out with the browser's
/// cookies, which is how the service tells admins and players apart.
pub struct Api {
    client: HttpApiClient,
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        Api {
            client: HttpApiClient::new(base_url),
        }
    }

    pub async fn fetch_game(&self, game_id: &GameId) -> ApiResult<Game> {
        self.client.get(&endpoints::game(game_id)).await
    }

    /// All players of a game, ordered by player id whatever shape the
    /// service answered with.
    pub async fn fetch_players(&self, game_id: &GameId) -> ApiResult<Vec<Player>> {
        let payload: PlayersPayload = self.client.get(&endpoints::players(game_id)).await?;
        Ok(payload.into_players())
    }

    pub async fn fetch_player(&self, game_id: &GameId, player_id: &PlayerId) -> ApiResult<Player> {
        let mut player: Player = self
            .client
            .get(&endpoints::player(game_id, player_id))
            .await?;
        if player.player_id.is_empty() {
            player.player_id = player_id.clone();
        }
        Ok(player)
    }

    pub async fn fetch_player_events(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> ApiResult<Vec<PlayerEvent>> {
        let payload: EventsPayload = self
            .client
            .get(&endpoints::player_events(game_id, player_id))
            .await?;
        Ok(payload.into_events())
    }

    pub async fn fetch_assistance(&self, game_id: &GameId) -> ApiResult<AssistanceQueue> {
        self.client.get(&endpoints::assist(game_id)).await
    }

    pub async fn advance_round(&self, game_id: &GameId) -> ApiResult<GameUpdate> {
        self.client
            .put(&endpoints::game(game_id), &AdvanceRound::default())
            .await
    }

    pub async fn set_paused(&self, game_id: &GameId, paused: bool) -> ApiResult<GameUpdate> {
        self.client
            .put(&endpoints::game(game_id), &SetPause::new(paused))
            .await
    }

    pub async fn set_auto_mode(&self, game_id: &GameId, auto: bool) -> ApiResult<GameUpdate> {
        self.client
            .put(&endpoints::game(game_id), &SetAutoMode { auto })
            .await
    }

    pub async fn end_game(&self, game_id: &GameId) -> ApiResult<GameUpdate> {
        self.client
            .put(&endpoints::game(game_id), &EndGame::default())
            .await
    }

    pub async fn assist_player(&self, game_id: &GameId, name: &str) -> ApiResult<GameUpdate> {
        let body = AssistPlayer {
            assisting: name.to_string(),
        };
        self.client.put(&endpoints::game(game_id), &body).await
    }

    /// Asks the service who the current browser is for this game.
    pub async fn resolve_session(&self, game_id: &GameId) -> ApiResult<Role> {
        let status: AuthStatus = self.client.get(&endpoints::auth(game_id)).await?;
        Ok(Role::from(status))
    }

    pub async fn login_moderator(&self, game_id: &GameId, password: &str) -> ApiResult<bool> {
        let body = ModeratorLogin {
            password: password.to_string(),
        };
        let result: LoginResult = self.client.post(&endpoints::auth(game_id), &body).await?;
        Ok(result.valid)
    }

    pub async fn create_game(&self, password: &str) -> ApiResult<GameId> {
        let body = CreateGame {
            password: password.to_string(),
        };
        let created: CreatedGame = self.client.post(&endpoints::games(), &body).await?;
        Ok(created.game_id)
    }

    pub async fn join_game(&self, game_id: &GameId, name: &str, api: &str) -> ApiResult<Player> {
        let body = JoinGame {
            name: name.to_string(),
            api: api.to_string(),
        };
        self.client.post(&endpoints::players(game_id), &body).await
    }

    pub async fn review_existed(&self, game_id: &GameId) -> ApiResult<bool> {
        let existed: ReviewExisted = self
            .client
            .get(&endpoints::review(game_id, ReviewArtifact::Existed))
            .await?;
        Ok(existed.existed)
    }

    pub async fn fetch_running_totals(&self, game_id: &GameId) -> ApiResult<Vec<RunningTotal>> {
        self.client
            .get(&endpoints::review(game_id, ReviewArtifact::FinalGraph))
            .await
    }

    pub async fn fetch_final_board(&self, game_id: &GameId) -> ApiResult<Vec<FinalStanding>> {
        self.client
            .get(&endpoints::review(game_id, ReviewArtifact::FinalBoard))
            .await
    }

    pub async fn fetch_stats(&self, game_id: &GameId) -> ApiResult<GameStats> {
        self.client
            .get(&endpoints::review(game_id, ReviewArtifact::Stats))
            .await
    }

    pub async fn fetch_key_points(&self, game_id: &GameId) -> ApiResult<Vec<KeyPoint>> {
        self.client
            .get(&endpoints::review(game_id, ReviewArtifact::Analysis))
            .await
    }
}

/// Create a new instance of the API client for the configured game service.
pub fn create() -> Api {
    Api::new(config::API_BASE_URL)
}

/// The API client, created once per component.
#[hook]
pub fn use_api() -> std::rc::Rc<Api> {
    use_memo((), |_| create())
}
