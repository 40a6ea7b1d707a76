use restartup::data::{PlayerEvent, ResponseType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerEventTableProps {
    pub events: Vec<PlayerEvent>,
}

fn outcome_badge(outcome: Option<ResponseType>) -> Html {
    let Some(outcome) = outcome else {
        return html! {};
    };
    let classes = match outcome {
        ResponseType::NoServerResponse | ResponseType::ErrorResponse => "bg-yellow-100 text-yellow-800",
        ResponseType::Wrong => "bg-red-100 text-red-700",
        ResponseType::Correct => "bg-green-100 text-green-700",
    };
    html! {
        <span class={classes!("px-2", "py-1", "text-xs", "font-semibold", "rounded-full", classes)}>
            { format!(" {} ", outcome.label()) }
        </span>
    }
}

/// A player's answered questions, newest as delivered by the service.
#[function_component(PlayerEventTable)]
pub fn player_event_table(props: &PlayerEventTableProps) -> Html {
    html! {
        <table class="min-w-full divide-y divide-gray-200" data-cy="player-events">
            <thead class="bg-gray-50">
                <tr>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "ID" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Query" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Difficulty" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Points" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Timestamp" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Outcome" }</th>
                </tr>
            </thead>
            <tbody class="bg-white divide-y divide-gray-200">
                {
                    // Rows without an id still need distinct keys
                    props.events.iter().enumerate().map(|(index, event)| html! {
                        <tr key={format!("{index}:{}", event.event_id)}>
                            <td class="px-4 py-2 text-xs font-mono text-gray-500">{ event.event_id.to_string() }</td>
                            <td class="px-4 py-2">{ event.query.clone() }</td>
                            <td class="px-4 py-2">{ event.difficulty }</td>
                            <td class="px-4 py-2 font-mono">{ event.points_gained }</td>
                            <td class="px-4 py-2 text-sm text-gray-600">{ event.timestamp.clone() }</td>
                            <td class="px-4 py-2">{ outcome_badge(event.response_type) }</td>
                        </tr>
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
