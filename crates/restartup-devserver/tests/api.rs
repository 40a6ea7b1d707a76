use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tower::ServiceExt;

use restartup::data::{
    AuthStatus, EventsPayload, FinalStanding, Game, GameUpdate, LoginResult, Player,
    PlayersPayload, ReviewExisted, Round,
};
use restartup::endpoints::{self, ReviewArtifact};
use restartup::id::{GameId, PlayerId};
use restartup_devserver::services::GameStore;
use restartup_devserver::{AppState, router, seed};

fn test_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new());
    (router(state.clone()), state)
}

async fn send(app: &Router, method: Method, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }
    let body = match body {
        Some(body) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_body<T: DeserializeOwned>(res: Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` part of the response's `Set-Cookie` header.
fn cookie_pair(res: &Response) -> String {
    let header = res.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    header.split(';').next().unwrap().to_string()
}

/// Creates a game and returns its id with the moderator cookie.
async fn create_game(app: &Router) -> (GameId, String) {
    let res = send(app, Method::POST, &endpoints::games(), None, Some(json!({"password": "pw"}))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = cookie_pair(&res);
    let game: Game = json_body(res).await;
    (game.game_id, cookie)
}

async fn join(app: &Router, game_id: &GameId, name: &str) -> (Player, String) {
    let body = json!({"name": name, "api": format!("http://{name}.local")});
    let res = send(app, Method::POST, &endpoints::players(game_id), None, Some(body)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = cookie_pair(&res);
    (json_body(res).await, cookie)
}

#[tokio::test]
async fn create_game_sets_admin_cookie() {
    let (app, _) = test_app();
    let (game_id, cookie) = create_game(&app).await;
    assert_eq!(cookie, format!("restartup_admin_{game_id}=1"));

    let res = send(&app, Method::GET, &endpoints::game(&game_id), None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let game: Game = json_body(res).await;
    assert_eq!(game.round, Round::WARMUP);
    assert!(!game.is_paused());
}

#[tokio::test]
async fn create_game_requires_password() {
    let (app, _) = test_app();
    let res = send(&app, Method::POST, "/", None, Some(json!({"password": ""}))).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_game_is_not_acceptable() {
    let (app, _) = test_app();
    let missing = GameId::from("NOPE42");
    for uri in [
        endpoints::game(&missing),
        endpoints::players(&missing),
        endpoints::auth(&missing),
        endpoints::player(&missing, &PlayerId::from("p1")),
    ] {
        let res = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(res.status(), StatusCode::NOT_ACCEPTABLE, "{uri}");
    }
}

#[tokio::test]
async fn unknown_player_is_not_acceptable() {
    let (app, _) = test_app();
    let (game_id, _) = create_game(&app).await;
    let ghost = PlayerId::from("ghost");
    let res = send(&app, Method::GET, &endpoints::player(&game_id, &ghost), None, None).await;
    assert_eq!(res.status(), StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn joined_players_are_listed_by_id() {
    let (app, _) = test_app();
    let (game_id, _) = create_game(&app).await;
    let (alice, cookie) = join(&app, &game_id, "alice").await;
    let (bob, _) = join(&app, &game_id, "bob").await;
    assert_eq!(cookie, format!("restartup_player_{game_id}={}", alice.player_id));

    let res = send(&app, Method::GET, &endpoints::players(&game_id), None, None).await;
    let payload: PlayersPayload = json_body(res).await;
    let players = payload.into_players();
    assert_eq!(players.len(), 2);
    assert!(players.windows(2).all(|pair| pair[0].player_id < pair[1].player_id));
    assert!(players.iter().any(|p| p.player_id == bob.player_id && p.name == "bob"));

    let res = send(&app, Method::GET, &endpoints::player(&game_id, &alice.player_id), None, None).await;
    let fetched: Player = json_body(res).await;
    assert_eq!(fetched.api, "http://alice.local");
}

#[tokio::test]
async fn join_requires_name_and_url() {
    let (app, _) = test_app();
    let (game_id, _) = create_game(&app).await;
    let body = json!({"name": " ", "api": ""});
    let res = send(&app, Method::POST, &endpoints::players(&game_id), None, Some(body)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn commands_require_admin_cookie() {
    let (app, _) = test_app();
    let (game_id, _) = create_game(&app).await;
    let (_, player_cookie) = join(&app, &game_id, "mallory").await;

    for cookie in [None, Some(player_cookie.as_str())] {
        let res = send(&app, Method::PUT, &endpoints::game(&game_id), cookie, Some(json!({"round": ""}))).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    let res = send(&app, Method::GET, &endpoints::game(&game_id), None, None).await;
    let game: Game = json_body(res).await;
    assert_eq!(game.round, Round::WARMUP);
}

#[tokio::test]
async fn admin_commands_answer_with_outcome() {
    let (app, _) = test_app();
    let (game_id, admin) = create_game(&app).await;
    let uri = endpoints::game(&game_id);

    let put = |body: Value| {
        let app = app.clone();
        let uri = uri.clone();
        let admin = admin.clone();
        async move {
            let res = send(&app, Method::PUT, &uri, Some(admin.as_str()), Some(body)).await;
            assert_eq!(res.status(), StatusCode::OK);
            json_body::<GameUpdate>(res).await
        }
    };

    assert_eq!(put(json!({"round": ""})).await, GameUpdate::RoundIncremented);
    assert_eq!(put(json!({"pause": "p"})).await, GameUpdate::Paused);

    let res = send(&app, Method::GET, &uri, None, None).await;
    let game: Game = json_body(res).await;
    assert_eq!(game.round, Round(1));
    assert!(game.is_paused());

    assert_eq!(put(json!({"pause": ""})).await, GameUpdate::Unpaused);
    assert_eq!(put(json!({"auto": true})).await, GameUpdate::AutoOn);
    assert_eq!(put(json!({"auto": false})).await, GameUpdate::AutoOff);
    assert_eq!(put(json!({"end": ""})).await, GameUpdate::GameEnded);

    let res = send(&app, Method::PUT, &uri, Some(admin.as_str()), Some(json!({}))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assisting_moves_player_between_queues() {
    let (app, state) = test_app();
    let (game_id, admin) = create_game(&app).await;
    state.games.request_assistance(&game_id, "walter").await.unwrap();

    let res = send(&app, Method::PUT, &endpoints::game(&game_id), Some(admin.as_str()), Some(json!({"assisting": "walter"}))).await;
    let update: GameUpdate = json_body(res).await;
    assert_eq!(update.as_wire(), "ASSISTING WALTER");

    let res = send(&app, Method::GET, &endpoints::assist(&game_id), None, None).await;
    let queue: Value = json_body(res).await;
    assert_eq!(queue["needs_assistance"], json!([]));
    assert_eq!(queue["being_assisted"], json!(["walter"]));
}

#[tokio::test]
async fn auth_reports_role_from_cookies() {
    let (app, _) = test_app();
    let (game_id, admin) = create_game(&app).await;
    let (player, player_cookie) = join(&app, &game_id, "carol").await;
    let uri = endpoints::auth(&game_id);

    let res = send(&app, Method::GET, &uri, Some(admin.as_str()), None).await;
    let status: AuthStatus = json_body(res).await;
    assert!(status.authorized);

    let res = send(&app, Method::GET, &uri, Some(player_cookie.as_str()), None).await;
    let status: AuthStatus = json_body(res).await;
    assert!(!status.authorized);
    assert_eq!(status.player, player.player_id.as_str());

    let res = send(&app, Method::GET, &uri, None, None).await;
    let status: AuthStatus = json_body(res).await;
    assert_eq!(status, AuthStatus::default());

    let stale = format!("restartup_player_{game_id}=gone");
    let res = send(&app, Method::GET, &uri, Some(stale.as_str()), None).await;
    let status: AuthStatus = json_body(res).await;
    assert!(status.player.is_empty());
}

#[tokio::test]
async fn moderator_login_checks_password() {
    let (app, _) = test_app();
    let (game_id, _) = create_game(&app).await;
    let uri = endpoints::auth(&game_id);

    let res = send(&app, Method::POST, &uri, None, Some(json!({"password": "wrong"}))).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(SET_COOKIE).is_none());
    let result: LoginResult = json_body(res).await;
    assert!(!result.valid);

    let res = send(&app, Method::POST, &uri, None, Some(json!({"password": "pw"}))).await;
    assert_eq!(cookie_pair(&res), format!("restartup_admin_{game_id}=1"));
    let result: LoginResult = json_body(res).await;
    assert!(result.valid);
}

#[tokio::test]
async fn seeded_game_serves_events_and_review() {
    let (app, state) = test_app();
    let game_id = seed::demo_game(&state.games).await.unwrap();
    let players = state.games.players(&game_id).await.unwrap();
    let walter = players.values().find(|p| p.name == "walter").unwrap();

    let res = send(&app, Method::GET, &endpoints::player_events(&game_id, &walter.player_id), None, None).await;
    let events = json_body::<EventsPayload>(res).await.into_events();
    assert_eq!(events.len(), 3);
    assert_eq!(events.last().unwrap().score, 60);

    let uri = endpoints::player_event(&game_id, &walter.player_id, &events[0].event_id);
    let res = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = send(&app, Method::GET, &endpoints::review(&game_id, ReviewArtifact::Existed), None, None).await;
    assert!(json_body::<ReviewExisted>(res).await.existed);

    let res = send(&app, Method::GET, &endpoints::review(&game_id, ReviewArtifact::FinalBoard), None, None).await;
    let board: Vec<FinalStanding> = json_body(res).await;
    assert_eq!(board[0].name, "walter");

    for artifact in [ReviewArtifact::FinalGraph, ReviewArtifact::Stats, ReviewArtifact::Analysis] {
        let res = send(&app, Method::GET, &endpoints::review(&game_id, artifact), None, None).await;
        assert_eq!(res.status(), StatusCode::OK, "{artifact:?}");
    }

    let res = send(&app, Method::GET, &endpoints::scores(&game_id), None, None).await;
    let totals: Vec<Value> = json_body(res).await;
    assert_eq!(totals.len(), 9);
}

#[tokio::test]
async fn review_of_unknown_game_did_not_exist() {
    let (app, _) = test_app();
    let missing = GameId::from("NOPE42");
    let res = send(&app, Method::GET, &endpoints::review(&missing, ReviewArtifact::Existed), None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(!json_body::<ReviewExisted>(res).await.existed);
}

#[tokio::test]
async fn health_counts_games() {
    let (app, _) = test_app();
    create_game(&app).await;
    create_game(&app).await;

    let res = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let health: Value = json_body(res).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["games"], 2);
}
