use restartup::data::FinalStanding;
use restartup::review::success_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FinalBoardProps {
    pub standings: Vec<FinalStanding>,
}

#[function_component(FinalBoard)]
pub fn final_board(props: &FinalBoardProps) -> Html {
    html! {
        <table class="min-w-full divide-y divide-gray-200" data-cy="final-board">
            <thead class="bg-gray-50">
                <tr>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "ID" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Player Name" }</th>
                    <th class="px-4 py-2 text-right text-xs font-medium text-gray-500 uppercase">{ "Score" }</th>
                    <th class="px-4 py-2 text-right text-xs font-medium text-gray-500 uppercase">{ "Longest Streak" }</th>
                    <th class="px-4 py-2 text-right text-xs font-medium text-gray-500 uppercase">{ "Success %" }</th>
                </tr>
            </thead>
            <tbody class="bg-white divide-y divide-gray-200">
                {
                    props.standings.iter().map(|standing| html! {
                        <tr key={standing.player_id.to_string()}>
                            <td class="px-4 py-2 text-xs font-mono text-gray-500">{ standing.player_id.to_string() }</td>
                            <td class="px-4 py-2">{ standing.name.clone() }</td>
                            <td class="px-4 py-2 text-right font-mono">{ standing.score }</td>
                            <td class="px-4 py-2 text-right">{ standing.longest_streak }</td>
                            <td class="px-4 py-2 text-right">{ success_percent(standing.success_ratio) }</td>
                        </tr>
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
