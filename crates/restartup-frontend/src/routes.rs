use restartup::id::{GameId, PlayerId};
use restartup::session::Destination;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{GameShell, HomePage, NotFoundPage, ReviewPage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/review/:game_id")]
    Review { game_id: String },
    #[at("/:game_id")]
    Leaderboard { game_id: String },
    #[at("/:game_id/players")]
    Players { game_id: String },
    #[at("/:game_id/players/:player_id")]
    Player { game_id: String, player_id: String },
    #[at("/:game_id/admin")]
    Admin { game_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The route showing `destination` within a game.
    pub fn for_destination(game_id: &GameId, destination: &Destination) -> Self {
        let game_id = game_id.to_string();
        match destination {
            Destination::Leaderboard => Route::Leaderboard { game_id },
            Destination::Players => Route::Players { game_id },
            Destination::Player(player_id) => Route::Player {
                game_id,
                player_id: player_id.to_string(),
            },
            Destination::Admin => Route::Admin { game_id },
        }
    }
}

fn game_view(game_id: String, destination: Destination) -> Html {
    html! { <GameShell game_id={GameId::from(game_id)} {destination} /> }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Review { game_id } => html! { <ReviewPage game_id={GameId::from(game_id)} /> },
        Route::Leaderboard { game_id } => game_view(game_id, Destination::Leaderboard),
        Route::Players { game_id } => game_view(game_id, Destination::Players),
        Route::Player { game_id, player_id } => {
            game_view(game_id, Destination::Player(PlayerId::from(player_id)))
        }
        Route::Admin { game_id } => game_view(game_id, Destination::Admin),
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
