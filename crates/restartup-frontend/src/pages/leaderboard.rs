use restartup::id::GameId;
use restartup::leaderboard;
use yew::prelude::*;

use crate::components::{LeaderboardTable, Loading};
use crate::config;
use crate::hooks::use_polling;
use crate::providers::use_api;

#[derive(Properties, PartialEq)]
pub struct LeaderboardProps {
    pub game_id: GameId,
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(props: &LeaderboardProps) -> Html {
    let api = use_api();
    let players = use_polling("players", props.game_id.clone(), move |game_id: GameId| {
        let api = api.clone();
        async move { api.fetch_players(&game_id).await }
    });

    let body = match players.data.as_ref() {
        Some(players) => {
            let rows = leaderboard::derive(players, &config::leaderboard());
            html! { <LeaderboardTable game_id={props.game_id.clone()} {rows} /> }
        }
        None => html! { <Loading message="Loading players..." /> },
    };

    html! {
        <div>
            <div class="flex items-baseline justify-between mb-4">
                <h1 class="text-3xl font-bold text-gray-900">{ "Leaderboard" }</h1>
                {
                    if let Some(updated_at) = players.updated_at.as_ref() {
                        html! { <span class="text-xs text-gray-500">{ format!("Updated {updated_at}") }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            { body }
        </div>
    }
}
