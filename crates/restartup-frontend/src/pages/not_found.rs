use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    #[prop_or(AttrValue::Static("Page not found"))]
    pub message: AttrValue,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundProps) -> Html {
    html! {
        <div class="p-8 max-w-xl mx-auto text-center" data-cy="not-found">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{ "404" }</h1>
            <p class="text-gray-600 mb-6">{ props.message.clone() }</p>
            <Link<Route> to={Route::Home} classes="text-indigo-600 hover:underline">
                { "Back to the start page" }
            </Link<Route>>
        </div>
    }
}
