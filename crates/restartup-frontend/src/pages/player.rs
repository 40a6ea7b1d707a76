use restartup::id::{GameId, PlayerId};
use restartup::review::success_percent;
use yew::prelude::*;

use crate::components::{Loading, PlayerEventTable};
use crate::hooks::use_polling;
use crate::pages::NotFoundPage;
use crate::providers::use_api;

#[derive(Properties, PartialEq)]
pub struct PlayerProps {
    pub game_id: GameId,
    pub player_id: PlayerId,
}

/// One player's score and answer history. Unknown ids render a not-found
/// view instead.
#[function_component(PlayerPage)]
pub fn player_page(props: &PlayerProps) -> Html {
    let api = use_api();
    let key = (props.game_id.clone(), props.player_id.clone());

    let player = {
        let api = api.clone();
        use_polling("player", key.clone(), move |(game_id, player_id): (GameId, PlayerId)| {
            let api = api.clone();
            async move { api.fetch_player(&game_id, &player_id).await }
        })
    };
    let events = use_polling("player events", key, move |(game_id, player_id): (GameId, PlayerId)| {
        let api = api.clone();
        async move { api.fetch_player_events(&game_id, &player_id).await }
    });

    if player.not_found || events.not_found {
        return html! {
            <NotFoundPage message={format!("Player {} is not part of this game", props.player_id)} />
        };
    }
    let Some(player) = player.data else {
        return html! { <Loading message="Loading player..." /> };
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900">{ format!("Player: {}", player.name) }</h1>
            <div class="mt-2 mb-6 flex space-x-6 text-gray-700">
                <span data-cy="player-score">{ format!("Score: {}", player.score) }</span>
                <span>{ format!("Longest streak: {}", player.longest_streak) }</span>
                <span>{ format!("Success: {}", success_percent(player.success_ratio())) }</span>
                <span class="text-sm text-gray-500">{ player.api.clone() }</span>
            </div>
            {
                match events.data {
                    Some(events) => html! { <PlayerEventTable {events} /> },
                    None => html! { <Loading message="Loading events..." /> },
                }
            }
        </div>
    }
}
