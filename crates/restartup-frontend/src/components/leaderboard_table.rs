use restartup::id::GameId;
use restartup::leaderboard::LeaderboardRow;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::StreakBar;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LeaderboardTableProps {
    pub game_id: GameId,
    /// Rows already in board order.
    pub rows: Vec<LeaderboardRow>,
}

#[function_component(LeaderboardTable)]
pub fn leaderboard_table(props: &LeaderboardTableProps) -> Html {
    html! {
        <table class="min-w-full divide-y divide-gray-200" data-cy="leaderboard">
            <thead class="bg-gray-50">
                <tr>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "#" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Name" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Callback URL" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Streak" }</th>
                    <th class="px-4 py-2 text-right text-xs font-medium text-gray-500 uppercase">{ "Score" }</th>
                    <th class="px-4 py-2"></th>
                </tr>
            </thead>
            <tbody class="bg-white divide-y divide-gray-200">
                {
                    props.rows.iter().map(|row| {
                        let player = &row.player;
                        let route = Route::Player {
                            game_id: props.game_id.to_string(),
                            player_id: player.player_id.to_string(),
                        };
                        html! {
                            <tr key={player.player_id.to_string()}>
                                <td class="px-4 py-2 text-gray-500">{ row.position }</td>
                                <td class="px-4 py-2 font-medium">
                                    <Link<Route> to={route} classes="hover:underline">{ player.name.clone() }</Link<Route>>
                                </td>
                                <td class="px-4 py-2 text-sm text-gray-600">{ player.api.clone() }</td>
                                <td class="px-4 py-2"><StreakBar cells={row.streak.clone()} /></td>
                                <td class="px-4 py-2 text-right font-mono">{ player.score }</td>
                                <td class="px-4 py-2" data-cy="on-fire">
                                    {
                                        if row.on_fire {
                                            html! {
                                                <span class="px-2 py-1 text-xs font-semibold rounded-full bg-red-100 text-red-700">
                                                    { " ON FIRE! " }
                                                </span>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
