use restartup::id::GameId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Loading;
use crate::hooks::use_polling;
use crate::providers::use_api;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct PlayersProps {
    pub game_id: GameId,
}

/// Everyone who joined the game, in player id order.
#[function_component(PlayersPage)]
pub fn players_page(props: &PlayersProps) -> Html {
    let api = use_api();
    let players = use_polling("players", props.game_id.clone(), move |game_id: GameId| {
        let api = api.clone();
        async move { api.fetch_players(&game_id).await }
    });

    let Some(players) = players.data else {
        return html! { <Loading message="Loading players..." /> };
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-4">{ "Players" }</h1>
            {
                if players.is_empty() {
                    html! { <p class="text-gray-500">{ "Nobody has joined yet." }</p> }
                } else {
                    html! {
                        <ul class="divide-y divide-gray-200 bg-white border border-gray-200 rounded-md" data-cy="players">
                            {
                                players.iter().map(|player| {
                                    let route = Route::Player {
                                        game_id: props.game_id.to_string(),
                                        player_id: player.player_id.to_string(),
                                    };
                                    html! {
                                        <li key={player.player_id.to_string()} class="px-4 py-2 flex justify-between">
                                            <Link<Route> to={route} classes="font-medium hover:underline">
                                                { player.name.clone() }
                                            </Link<Route>>
                                            <span class="text-sm text-gray-600">{ player.api.clone() }</span>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    }
                }
            }
        </div>
    }
}
