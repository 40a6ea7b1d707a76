mod components;
mod config;
mod hooks;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <main class="min-h-screen bg-gray-50 text-gray-900">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    restartup::log::setup().expect("Failed to setup logging");
    restartup::log::info!("Talking to the game service at {}", config::API_BASE_URL);
    yew::Renderer::<App>::new().render();
}
