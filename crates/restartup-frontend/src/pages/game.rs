use restartup::id::GameId;
use restartup::log::warn;
use restartup::poll::CancelToken;
use restartup::session::{Destination, guard};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Loading, NavMenu};
use crate::hooks::use_session;
use crate::pages::{AdminPage, LeaderboardPage, NotFoundPage, PlayerPage, PlayersPage};
use crate::providers::use_api;
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
enum GameCheck {
    Pending,
    Found,
    Missing,
}

#[derive(Properties, PartialEq)]
pub struct GameShellProps {
    pub game_id: GameId,
    pub destination: Destination,
}

/// Frame around every in-game view: checks that the game exists, resolves
/// who is looking, shows the game menu, and keeps non-admins out of the
/// admin panel.
#[function_component(GameShell)]
pub fn game_shell(props: &GameShellProps) -> Html {
    let api = use_api();
    let role = use_session(&props.game_id);
    let check = use_state(|| GameCheck::Pending);

    {
        let check = check.clone();
        use_effect_with(props.game_id.clone(), move |game_id: &GameId| {
            check.set(GameCheck::Pending);
            let token = CancelToken::new();
            let game_id = game_id.clone();
            {
                let token = token.clone();
                spawn_local(async move {
                    let outcome = match api.fetch_game(&game_id).await {
                        Ok(_) => GameCheck::Found,
                        Err(err) if err.is_not_found() => GameCheck::Missing,
                        Err(err) => {
                            // The views keep polling and will show data once the service answers
                            warn!("Checking game {} failed: {}", game_id, err);
                            GameCheck::Found
                        }
                    };
                    if !token.is_cancelled() {
                        check.set(outcome);
                    }
                });
            }
            move || token.cancel()
        });
    }

    if *check == GameCheck::Missing {
        return html! { <NotFoundPage message={format!("Game {} does not exist", props.game_id)} /> };
    }
    let (GameCheck::Found, Some(role)) = (*check, role) else {
        return html! { <Loading /> };
    };

    let allowed = guard(props.destination.clone(), &role);
    if allowed != props.destination {
        return html! {
            <Redirect<Route> to={Route::for_destination(&props.game_id, &allowed)} />
        };
    }

    let game_id = props.game_id.clone();
    let view = match &props.destination {
        Destination::Leaderboard => html! { <LeaderboardPage {game_id} /> },
        Destination::Players => html! { <PlayersPage {game_id} /> },
        Destination::Player(player_id) => {
            html! { <PlayerPage {game_id} player_id={player_id.clone()} /> }
        }
        Destination::Admin => html! { <AdminPage {game_id} /> },
    };

    html! {
        <div class="p-8 max-w-6xl mx-auto">
            <NavMenu game_id={props.game_id.clone()} {role} />
            { view }
        </div>
    }
}
