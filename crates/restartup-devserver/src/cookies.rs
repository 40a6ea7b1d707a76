//! The cookies the game service uses to remember admins and players.
//!
//! Both are scoped to one game: `restartup_admin_<gameId>=1` marks a
//! moderator and `restartup_player_<gameId>=<playerId>` a joined player.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

use restartup::id::{GameId, PlayerId};

const ADMIN_PREFIX: &str = "restartup_admin_";
const PLAYER_PREFIX: &str = "restartup_player_";

/// Looks up a cookie by name across every `Cookie` header of a request.
pub fn find(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

pub fn is_admin(headers: &HeaderMap, game_id: &GameId) -> bool {
    find(headers, &format!("{ADMIN_PREFIX}{game_id}")).is_some_and(|value| value == "1")
}

pub fn player(headers: &HeaderMap, game_id: &GameId) -> Option<PlayerId> {
    find(headers, &format!("{PLAYER_PREFIX}{game_id}"))
        .filter(|value| !value.is_empty())
        .map(PlayerId::from)
}

/// `Set-Cookie` value granting moderator rights on a game.
pub fn admin_cookie(game_id: &GameId) -> String {
    format!("{ADMIN_PREFIX}{game_id}=1; Path=/; SameSite=Lax")
}

/// `Set-Cookie` value remembering which player this browser joined as.
pub fn player_cookie(game_id: &GameId, player_id: &PlayerId) -> String {
    format!("{PLAYER_PREFIX}{game_id}={player_id}; Path=/; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[test]
    fn test_reads_scoped_cookies() {
        let game_id = GameId::from("ABC123");
        let headers = headers("theme=dark; restartup_admin_ABC123=1; restartup_player_ABC123=p1");

        assert!(is_admin(&headers, &game_id));
        assert_eq!(player(&headers, &game_id), Some(PlayerId::from("p1")));

        let other = GameId::from("ZZZ999");
        assert!(!is_admin(&headers, &other));
        assert_eq!(player(&headers, &other), None);
    }

    #[test]
    fn test_no_cookies() {
        let headers = HeaderMap::new();
        assert!(!is_admin(&headers, &GameId::from("ABC123")));
        assert_eq!(find(&headers, "anything"), None);
    }

    #[test]
    fn test_set_cookie_values_round_trip() {
        let game_id = GameId::from("ABC123");
        let cookie = admin_cookie(&game_id);
        let pair = cookie.split(';').next().unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(pair).unwrap());
        assert!(is_admin(&headers, &game_id));
        assert!(player_cookie(&game_id, &PlayerId::from("p7")).starts_with("restartup_player_ABC123=p7;"));
    }
}
