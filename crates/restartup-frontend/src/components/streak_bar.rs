use restartup::leaderboard::StreakColor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StreakBarProps {
    /// Cell colors, oldest outcome first.
    pub cells: Vec<StreakColor>,
}

/// One small block per recent answer.
#[function_component(StreakBar)]
pub fn streak_bar(props: &StreakBarProps) -> Html {
    html! {
        <div class="flex items-center h-4 space-x-px" data-cy="streak-bar">
            {
                props.cells.iter().map(|color| {
                    html! {
                        <span
                            class="inline-block w-2 h-4 rounded-sm"
                            style={format!("background-color: {}", color.css())}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
