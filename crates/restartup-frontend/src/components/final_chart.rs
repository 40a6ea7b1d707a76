use restartup::data::FinalStanding;
use restartup::review::ScoreTimeline;
use yew::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 240.0;
const PALETTE: [&str; 8] = [
    "#4f46e5", "#db2777", "#059669", "#d97706", "#0891b2", "#7c3aed", "#dc2626", "#65a30d",
];

#[derive(Properties, PartialEq)]
pub struct FinalChartProps {
    pub timeline: ScoreTimeline,
    /// Used to put names on the legend.
    #[prop_or_default]
    pub standings: Vec<FinalStanding>,
}

/// Every player's score over the game as one line each.
#[function_component(FinalChart)]
pub fn final_chart(props: &FinalChartProps) -> Html {
    if props.timeline.is_empty() {
        return html! { <p class="text-gray-500">{ "No scores were recorded." }</p> };
    }

    let lines = props.timeline.polylines(WIDTH, HEIGHT);
    let name_of = |player_id: &str| {
        props
            .standings
            .iter()
            .find(|standing| standing.player_id.as_str() == player_id)
            .map(|standing| standing.name.clone())
            .unwrap_or_else(|| player_id.to_string())
    };
    let range = props
        .timeline
        .score_range()
        .map(|(low, high)| format!("{low} to {high} points"))
        .unwrap_or_default();

    html! {
        <div data-cy="final-chart">
            <svg
                class="w-full border border-gray-200 rounded bg-white"
                viewBox={format!("-4 -4 {} {}", WIDTH + 8.0, HEIGHT + 8.0)}
                preserveAspectRatio="none"
            >
                {
                    lines.iter().enumerate().map(|(index, (player_id, points))| html! {
                        <polyline
                            key={player_id.to_string()}
                            fill="none"
                            stroke={PALETTE[index % PALETTE.len()]}
                            stroke-width="2"
                            points={points.clone()}
                        />
                    }).collect::<Html>()
                }
            </svg>
            <p class="mt-1 text-xs text-gray-500">{ range }</p>
            <ul class="mt-2 flex flex-wrap gap-3 text-sm">
                {
                    lines.iter().enumerate().map(|(index, (player_id, _))| html! {
                        <li key={player_id.to_string()} class="flex items-center space-x-1">
                            <span
                                class="inline-block w-3 h-3 rounded-sm"
                                style={format!("background-color: {}", PALETTE[index % PALETTE.len()])}
                            />
                            <span>{ name_of(player_id.as_str()) }</span>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
