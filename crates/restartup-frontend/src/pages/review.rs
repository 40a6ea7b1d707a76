use restartup::api::ApiResult;
use restartup::data::{FinalStanding, GameStats, KeyPoint};
use restartup::id::GameId;
use restartup::log::warn;
use restartup::poll::CancelToken;
use restartup::review::ScoreTimeline;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{FinalBoard, FinalChart, GameStatsList, KeyPointsTable, Loading};
use crate::pages::NotFoundPage;
use crate::providers::use_api;

#[derive(Clone, Debug, Default, PartialEq)]
struct Review {
    timeline: Option<ScoreTimeline>,
    standings: Option<Vec<FinalStanding>>,
    stats: Option<GameStats>,
    key_points: Option<Vec<KeyPoint>>,
}

#[derive(Clone, Debug, PartialEq)]
enum ReviewState {
    Loading,
    Missing,
    Ready(Review),
}

/// Keeps what arrived and logs what did not.
fn keep<T>(artifact: &str, game_id: &GameId, result: ApiResult<T>) -> Option<T> {
    result
        .map_err(|err| warn!("Fetching {} of game {} failed: {}", artifact, game_id, err))
        .ok()
}

#[derive(Properties, PartialEq)]
pub struct ReviewProps {
    pub game_id: GameId,
}

#[function_component(ReviewPage)]
pub fn review_page(props: &ReviewProps) -> Html {
    let api = use_api();
    let state = use_state(|| ReviewState::Loading);

    {
        let state = state.clone();
        use_effect_with(props.game_id.clone(), move |game_id: &GameId| {
            state.set(ReviewState::Loading);
            let token = CancelToken::new();
            let game_id = game_id.clone();
            {
                let token = token.clone();
                spawn_local(async move {
                    let existed = match api.review_existed(&game_id).await {
                        Ok(existed) => existed,
                        Err(err) if err.is_not_found() => false,
                        Err(err) => {
                            warn!("Checking review of game {} failed: {}", game_id, err);
                            true
                        }
                    };
                    if !existed {
                        if !token.is_cancelled() {
                            state.set(ReviewState::Missing);
                        }
                        return;
                    }

                    let (totals, standings, stats, key_points) = futures::join!(
                        api.fetch_running_totals(&game_id),
                        api.fetch_final_board(&game_id),
                        api.fetch_stats(&game_id),
                        api.fetch_key_points(&game_id),
                    );
                    let review = Review {
                        timeline: keep("final graph", &game_id, totals)
                            .map(|totals| ScoreTimeline::from_running_totals(&totals)),
                        standings: keep("final board", &game_id, standings),
                        stats: keep("stats", &game_id, stats),
                        key_points: keep("analysis", &game_id, key_points),
                    };
                    if !token.is_cancelled() {
                        state.set(ReviewState::Ready(review));
                    }
                });
            }
            move || token.cancel()
        });
    }

    let review = match &*state {
        ReviewState::Loading => return html! { <Loading message="Loading review..." /> },
        ReviewState::Missing => {
            return html! {
                <NotFoundPage message={format!("There is no review for game {}", props.game_id)} />
            };
        }
        ReviewState::Ready(review) => review.clone(),
    };
    let unavailable = || html! { <p class="text-gray-500">{ "Not available." }</p> };

    html! {
        <div class="p-8 max-w-6xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold text-gray-900">{ format!("Game Review: {}", props.game_id) }</h1>

            <section>
                <h3 class="text-xl font-semibold mb-2">{ "Final Chart" }</h3>
                {
                    match review.timeline {
                        Some(timeline) => html! {
                            <FinalChart {timeline} standings={review.standings.clone().unwrap_or_default()} />
                        },
                        None => unavailable(),
                    }
                }
            </section>

            <section>
                <h3 class="text-xl font-semibold mb-2">{ "Analysis" }</h3>
                {
                    match review.stats {
                        Some(stats) => html! { <GameStatsList {stats} /> },
                        None => unavailable(),
                    }
                }
            </section>

            <section>
                <h3 class="text-xl font-semibold mb-2">{ "Final Leaderboard" }</h3>
                {
                    match review.standings {
                        Some(standings) => html! { <FinalBoard {standings} /> },
                        None => unavailable(),
                    }
                }
            </section>

            <section>
                <h3 class="text-xl font-semibold mb-2">{ "Key Points" }</h3>
                {
                    match review.key_points {
                        Some(key_points) => html! { <KeyPointsTable {key_points} /> },
                        None => unavailable(),
                    }
                }
            </section>
        </div>
    }
}
