use restartup::async_callback;
use restartup::data::{Game, GameUpdate};
use restartup::id::GameId;
use restartup::log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{CopyButton, Loading};
use crate::hooks::use_polling;
use crate::providers::use_api;
use crate::routes::Route;

/// Admin state learned from PUT responses, shown until the next poll
/// result differs from the last one.
#[derive(Clone, Debug, Default, PartialEq)]
struct Overrides {
    game: Option<Game>,
    paused: Option<bool>,
    auto_mode: Option<bool>,
    ended: bool,
}

#[derive(Properties, PartialEq)]
pub struct AdminProps {
    pub game_id: GameId,
}

const CONTROL_CLASSES: &str = "px-4 py-2 text-sm font-medium rounded-md border disabled:opacity-50 disabled:cursor-not-allowed";

#[function_component(AdminPage)]
pub fn admin_page(props: &AdminProps) -> Html {
    let api = use_api();
    let game_id = props.game_id.clone();
    let overrides = use_state(Overrides::default);

    let polled = {
        let api = api.clone();
        use_polling("game", game_id.clone(), move |game_id: GameId| {
            let api = api.clone();
            async move { api.fetch_game(&game_id).await }
        })
    };
    let assistance = {
        let api = api.clone();
        use_polling("assistance", game_id.clone(), move |game_id: GameId| {
            let api = api.clone();
            async move { api.fetch_assistance(&game_id).await }
        })
    };

    {
        let overrides = overrides.clone();
        use_effect_with(polled.data.clone(), move |_| {
            overrides.set(Overrides {
                ended: overrides.ended,
                ..Overrides::default()
            });
        });
    }

    let on_advance = async_callback!([api, game_id, overrides] {
        match api.advance_round(&game_id).await {
            Ok(GameUpdate::RoundIncremented) => match api.fetch_game(&game_id).await {
                Ok(game) => {
                    info!("Game {} is now in round {}", game_id, game.round);
                    overrides.set(Overrides {
                        game: Some(game),
                        ..(*overrides).clone()
                    });
                }
                Err(err) => warn!("Refreshing game {} failed: {}", game_id, err),
            },
            Ok(GameUpdate::GameEnded) => overrides.set(Overrides {
                ended: true,
                ..(*overrides).clone()
            }),
            Ok(other) => warn!("Unexpected answer to advancing the round: {}", other.as_wire()),
            Err(err) => warn!("Advancing the round of game {} failed: {}", game_id, err),
        }
    });

    let currently_paused = overrides
        .paused
        .or_else(|| overrides.game.as_ref().map(Game::is_paused))
        .or_else(|| polled.data.as_ref().map(Game::is_paused))
        .unwrap_or(false);
    let on_toggle_pause = async_callback!([api, game_id, overrides, currently_paused] {
        match api.set_paused(&game_id, !currently_paused).await {
            Ok(update @ (GameUpdate::Paused | GameUpdate::Unpaused)) => overrides.set(Overrides {
                paused: Some(update == GameUpdate::Paused),
                ..(*overrides).clone()
            }),
            Ok(other) => warn!("Unexpected answer to toggling pause: {}", other.as_wire()),
            Err(err) => warn!("Toggling pause of game {} failed: {}", game_id, err),
        }
    });

    let auto_mode = overrides
        .auto_mode
        .or_else(|| overrides.game.as_ref().map(|game| game.auto_mode))
        .or_else(|| polled.data.as_ref().map(|game| game.auto_mode))
        .unwrap_or(false);
    let on_toggle_auto = async_callback!([api, game_id, overrides, auto_mode] {
        match api.set_auto_mode(&game_id, !auto_mode).await {
            Ok(update @ (GameUpdate::AutoOn | GameUpdate::AutoOff)) => overrides.set(Overrides {
                auto_mode: Some(update == GameUpdate::AutoOn),
                ..(*overrides).clone()
            }),
            Ok(other) => warn!("Unexpected answer to toggling auto mode: {}", other.as_wire()),
            Err(err) => warn!("Toggling auto mode of game {} failed: {}", game_id, err),
        }
    });

    let on_end = async_callback!([api, game_id, overrides] {
        match api.end_game(&game_id).await {
            Ok(GameUpdate::GameEnded) => {
                info!("Game {} ended", game_id);
                overrides.set(Overrides {
                    ended: true,
                    ..(*overrides).clone()
                });
            }
            Ok(other) => warn!("Unexpected answer to ending the game: {}", other.as_wire()),
            Err(err) => warn!("Ending game {} failed: {}", game_id, err),
        }
    });

    let on_assist = async_callback!([api, game_id] |name: String| {
        match api.assist_player(&game_id, &name).await {
            Ok(GameUpdate::Assisting(assisted)) => info!("Assisting {}", assisted),
            Ok(other) => warn!("Unexpected answer to assisting {}: {}", name, other.as_wire()),
            Err(err) => warn!("Assisting {} failed: {}", name, err),
        }
    });

    let Some(game) = overrides.game.clone().or_else(|| polled.data.clone()) else {
        return html! { <Loading message="Loading game..." /> };
    };
    let ended = overrides.ended || game.ended;
    let round_label = if currently_paused {
        "PAUSED".to_string()
    } else {
        game.round.to_string()
    };
    let needs_assistance = assistance
        .data
        .map(|queue| queue.needs_assistance)
        .unwrap_or_else(|| game.players_to_assist.needs_assistance.clone());

    html! {
        <div class="space-y-6" data-cy="admin">
            <section>
                <h3 class="text-lg font-semibold">{ "Game ID" }</h3>
                <div class="flex items-center">
                    <h4 class="text-gray-500 font-mono">{ game_id.to_string() }</h4>
                    <CopyButton text={game_id.to_string()} label="Copy ID" />
                </div>
            </section>

            <section>
                <h3 class="text-lg font-semibold">{ "Number of Players" }</h3>
                <h4 class="text-gray-500" data-cy="player-count">{ game.player_count() }</h4>
            </section>

            <section>
                <div class="flex flex-wrap items-center gap-3">
                    <h3 class="text-lg font-semibold mr-4">{ "Rounds" }</h3>
                    <button
                        class={classes!(CONTROL_CLASSES, "border-indigo-500", "text-indigo-700", "hover:bg-indigo-50")}
                        onclick={on_advance}
                        disabled={ended}
                    >
                        { "Advance Round" }
                    </button>
                    <button
                        class={classes!(CONTROL_CLASSES, "border-red-500", "text-red-700", "hover:bg-red-50")}
                        onclick={on_toggle_pause}
                        disabled={ended}
                    >
                        { "Toggle Pause" }
                    </button>
                    <button
                        class={classes!(CONTROL_CLASSES, "border-teal-500", "text-teal-700", "hover:bg-teal-50")}
                        onclick={on_toggle_auto}
                        disabled={ended}
                    >
                        { if auto_mode { "Auto Mode: On" } else { "Auto Mode: Off" } }
                    </button>
                    <button
                        class={classes!(CONTROL_CLASSES, "border-gray-500", "text-gray-700", "hover:bg-gray-50")}
                        onclick={on_end}
                        disabled={ended}
                    >
                        { "End Game" }
                    </button>
                </div>
                <h4 class="mt-2 text-gray-500" data-cy="round">{ round_label }</h4>
            </section>

            {
                if ended {
                    html! {
                        <section class="p-4 bg-indigo-50 border border-indigo-200 rounded-md">
                            <p class="mb-2">{ "The game has ended." }</p>
                            <Link<Route> to={Route::Review { game_id: game_id.to_string() }} classes="text-indigo-700 font-medium hover:underline">
                                { "Review the game" }
                            </Link<Route>>
                        </section>
                    }
                } else {
                    html! {}
                }
            }

            <section>
                <h3 class="text-lg font-semibold mb-2">{ "Players Needing Assistance" }</h3>
                {
                    if needs_assistance.is_empty() {
                        html! { <p class="text-gray-500">{ "Nobody needs help right now." }</p> }
                    } else {
                        html! {
                            <ul class="space-y-2" data-cy="assist-list">
                                {
                                    needs_assistance.into_iter().map(|name| {
                                        let label = name.clone();
                                        let onclick = on_assist.reform(move |_: MouseEvent| name.clone());
                                        html! {
                                            <li key={label.clone()} class="flex items-center justify-between max-w-md">
                                                <span>{ label }</span>
                                                <button class={classes!(CONTROL_CLASSES, "border-amber-500", "text-amber-700")} onclick={onclick}>
                                                    { "Assist" }
                                                </button>
                                            </li>
                                        }
                                    }).collect::<Html>()
                                }
                            </ul>
                        }
                    }
                }
            </section>
        </div>
    }
}
