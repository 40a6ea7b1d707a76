use restartup::data::{GameStats, StreakRecord, Swing};
use restartup::review::success_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GameStatsProps {
    pub stats: GameStats,
}

fn swing_text(swing: &Swing, verb: &str) -> String {
    format!(
        "{} {} {} points over {} ms, moving from place {} to place {}",
        swing.achieved_by_team,
        verb,
        swing.points_gained_during_that_streak.abs(),
        swing.duration,
        swing.start_position,
        swing.final_achieved_position,
    )
}

fn streak_text(streak: &StreakRecord) -> String {
    match streak {
        StreakRecord::Count(count) => format!("{count} correct answers in a row"),
        StreakRecord::Detailed {
            correct_answers_in_a_row,
            duration,
            achieved_by_team,
        } => format!(
            "{correct_answers_in_a_row} correct answers in a row by {achieved_by_team}, lasting {duration} ms"
        ),
    }
}

#[function_component(GameStatsList)]
pub fn game_stats_list(props: &GameStatsProps) -> Html {
    let stats = &props.stats;
    let items = [
        format!("Total requests: {}", stats.total_requests),
        format!("Average streak: {}", stats.average_streak),
        format!("Average on fire duration: {} ms", stats.average_on_fire_duration),
        format!(
            "Longest on fire duration: {} ms by {}",
            stats.longest_on_fire_duration.value, stats.longest_on_fire_duration.achieved_by_team
        ),
        format!("Longest streak: {}", streak_text(&stats.longest_streak)),
        format!("Average success rate: {}", success_percent(stats.average_success_rate)),
        format!(
            "Best success rate: {} by {}",
            success_percent(stats.best_success_rate.value),
            stats.best_success_rate.achieved_by_team
        ),
        format!(
            "Most epic comeback: {}",
            swing_text(&stats.most_epic_comeback, "gained")
        ),
        format!("Most epic fail: {}", swing_text(&stats.most_epic_fail, "lost")),
    ];

    html! {
        <ul class="list-disc pl-6 space-y-1" data-cy="game-stats">
            { for items.into_iter().map(|item| html! { <li>{ item }</li> }) }
        </ul>
    }
}
