use restartup::async_callback;
use restartup::id::GameId;
use restartup::log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::providers::use_api;
use crate::routes::Route;

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent";
const BUTTON_CLASSES: &str = "px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed";

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

/// Forms submit through their button's click handler; the browser's own
/// submission would reload the page.
fn prevent_submit() -> Callback<SubmitEvent> {
    Callback::from(|e: SubmitEvent| e.prevent_default())
}

fn error_box(error: Option<&String>) -> Html {
    match error {
        Some(error) => html! {
            <div class="p-3 bg-red-50 border border-red-200 rounded-md">
                <p class="text-sm text-red-700">{ error }</p>
            </div>
        },
        None => html! {},
    }
}

#[function_component(CreateGameForm)]
fn create_game_form() -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let on_submit = async_callback!([api, navigator, password, loading, error_msg] {
        if password.is_empty() {
            error_msg.set(Some("A moderator password is required".to_string()));
            return;
        }

        loading.set(true);
        error_msg.set(None);
        match api.create_game(&password).await {
            Ok(game_id) => {
                info!("Created game {}", game_id);
                loading.set(false);
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Admin { game_id: game_id.to_string() });
                }
            }
            Err(err) => {
                warn!("Creating a game failed: {}", err);
                loading.set(false);
                error_msg.set(Some(format!("Failed to create game: {err}")));
            }
        }
    });

    html! {
        <form onsubmit={prevent_submit()} class="space-y-3 p-6 bg-white border border-gray-200 rounded-lg">
            <h2 class="text-xl font-semibold text-gray-900">{ "Create Game" }</h2>
            <input
                type="password"
                class={INPUT_CLASSES}
                placeholder="Moderator password"
                aria-label="Moderator password"
                value={(*password).clone()}
                oninput={text_input(&password)}
                disabled={*loading}
            />
            { error_box(error_msg.as_ref()) }
            <button type="submit" class={BUTTON_CLASSES} onclick={on_submit} disabled={*loading}>
                { if *loading { "Creating..." } else { "Create" } }
            </button>
        </form>
    }
}

#[function_component(JoinGameForm)]
fn join_game_form() -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let game_id = use_state(String::new);
    let name = use_state(String::new);
    let url = use_state(String::new);
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let is_valid = !game_id.is_empty() && !name.is_empty() && !url.is_empty();

    let on_submit = async_callback!([api, navigator, game_id, name, url, loading, error_msg] {
        if game_id.is_empty() || name.is_empty() || url.is_empty() {
            error_msg.set(Some("Game ID, name and URL are all required".to_string()));
            return;
        }

        loading.set(true);
        error_msg.set(None);
        let id = GameId::from(game_id.trim());
        match api.join_game(&id, &name, &url).await {
            Ok(player) => {
                info!("Joined game {} as {}", id, player.player_id);
                loading.set(false);
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Player {
                        game_id: id.to_string(),
                        player_id: player.player_id.to_string(),
                    });
                }
            }
            Err(err) if err.is_not_found() => {
                loading.set(false);
                error_msg.set(Some(format!("No game with ID {id}")));
            }
            Err(err) => {
                warn!("Joining game {} failed: {}", id, err);
                loading.set(false);
                error_msg.set(Some(format!("Failed to join game: {err}")));
            }
        }
    });

    html! {
        <form onsubmit={prevent_submit()} class="space-y-3 p-6 bg-white border border-gray-200 rounded-lg">
            <h2 class="text-xl font-semibold text-gray-900">{ "Join as Player" }</h2>
            <input type="text" class={INPUT_CLASSES} placeholder="Game ID" aria-label="Game ID"
                value={(*game_id).clone()} oninput={text_input(&game_id)} disabled={*loading} />
            <input type="text" class={INPUT_CLASSES} placeholder="Team name" aria-label="Team name"
                value={(*name).clone()} oninput={text_input(&name)} disabled={*loading} />
            <input type="url" class={INPUT_CLASSES} placeholder="http://your-server:8000" aria-label="Callback URL"
                value={(*url).clone()} oninput={text_input(&url)} disabled={*loading} />
            { error_box(error_msg.as_ref()) }
            <button type="submit" class={BUTTON_CLASSES} onclick={on_submit} disabled={*loading || !is_valid}>
                { if *loading { "Joining..." } else { "Join" } }
            </button>
        </form>
    }
}

#[function_component(ModeratorLoginForm)]
fn moderator_login_form() -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let game_id = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let on_submit = async_callback!([api, navigator, game_id, password, loading, error_msg] {
        if game_id.is_empty() {
            error_msg.set(Some("Game ID is required".to_string()));
            return;
        }

        loading.set(true);
        error_msg.set(None);
        let id = GameId::from(game_id.trim());
        match api.login_moderator(&id, &password).await {
            Ok(true) => {
                loading.set(false);
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Admin { game_id: id.to_string() });
                }
            }
            Ok(false) => {
                loading.set(false);
                error_msg.set(Some("Invalid password".to_string()));
            }
            Err(err) if err.is_not_found() => {
                loading.set(false);
                error_msg.set(Some(format!("No game with ID {id}")));
            }
            Err(err) => {
                warn!("Moderator login for game {} failed: {}", id, err);
                loading.set(false);
                error_msg.set(Some(format!("Failed to log in: {err}")));
            }
        }
    });

    html! {
        <form onsubmit={prevent_submit()} class="space-y-3 p-6 bg-white border border-gray-200 rounded-lg">
            <h2 class="text-xl font-semibold text-gray-900">{ "Join as Moderator" }</h2>
            <input type="text" class={INPUT_CLASSES} placeholder="Game ID" aria-label="Moderator game ID"
                value={(*game_id).clone()} oninput={text_input(&game_id)} disabled={*loading} />
            <input type="password" class={INPUT_CLASSES} placeholder="Password" aria-label="Password"
                value={(*password).clone()} oninput={text_input(&password)} disabled={*loading} />
            { error_box(error_msg.as_ref()) }
            <button type="submit" class={BUTTON_CLASSES} onclick={on_submit} disabled={*loading}>
                { if *loading { "Logging in..." } else { "Log in" } }
            </button>
        </form>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="p-8 max-w-5xl mx-auto">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{ "Extreme Restartup" }</h1>
            <div class="grid gap-6 md:grid-cols-3">
                <CreateGameForm />
                <JoinGameForm />
                <ModeratorLoginForm />
            </div>
        </div>
    }
}
