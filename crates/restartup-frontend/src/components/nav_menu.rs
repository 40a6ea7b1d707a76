use restartup::id::GameId;
use restartup::session::{Destination, Role, nav_entries};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NavMenuProps {
    pub game_id: GameId,
    pub role: Role,
}

fn entry_classes(destination: &Destination) -> &'static str {
    match destination {
        Destination::Admin | Destination::Player(_) => {
            "px-3 py-2 rounded-md text-sm font-medium bg-purple-100 text-purple-800 hover:bg-purple-200"
        }
        Destination::Leaderboard => {
            "px-3 py-2 rounded-md text-sm font-medium bg-indigo-100 text-indigo-800 hover:bg-indigo-200"
        }
        Destination::Players => {
            "px-3 py-2 rounded-md text-sm font-medium bg-pink-100 text-pink-800 hover:bg-pink-200"
        }
    }
}

/// The game menu. Which entries show depends on the viewer's role.
#[function_component(NavMenu)]
pub fn nav_menu(props: &NavMenuProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <nav class="relative mb-6" data-cy="nav-menu">
            <button
                class="p-2 rounded-md border border-gray-300 hover:bg-gray-100"
                aria-label="Game Menu"
                onclick={toggle}
            >
                <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                </svg>
            </button>
            {
                if *open {
                    html! {
                        <div class="absolute z-10 mt-2 w-52 p-2 bg-white border border-gray-200 rounded-md shadow-md flex flex-col space-y-2">
                            <span class="px-1 text-xs uppercase text-gray-500">{ "Game Menu" }</span>
                            {
                                nav_entries(&props.role).into_iter().map(|entry| {
                                    let route = Route::for_destination(&props.game_id, &entry.destination);
                                    html! {
                                        <Link<Route> to={route} classes={classes!(entry_classes(&entry.destination))}>
                                            { entry.label }
                                        </Link<Route>>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
