use restartup::data::KeyPoint;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KeyPointsTableProps {
    pub key_points: Vec<KeyPoint>,
}

#[function_component(KeyPointsTable)]
pub fn key_points_table(props: &KeyPointsTableProps) -> Html {
    html! {
        <table class="min-w-full divide-y divide-gray-200" data-cy="key-points">
            <thead class="bg-gray-50">
                <tr>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Title" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Description" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Occurrence Time" }</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{ "Player" }</th>
                </tr>
            </thead>
            <tbody class="bg-white divide-y divide-gray-200">
                {
                    props.key_points.iter().enumerate().map(|(index, point)| html! {
                        <tr key={index}>
                            <td class="px-4 py-2 font-medium">{ point.title.clone() }</td>
                            <td class="px-4 py-2 w-80">{ point.description.clone() }</td>
                            <td class="px-4 py-2 text-sm text-gray-600">{ point.timestamp.clone() }</td>
                            <td class="px-4 py-2">{ point.player_id.clone() }</td>
                        </tr>
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
