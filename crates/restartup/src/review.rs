//! Derivations for the post-game review screen.

use std::collections::BTreeSet;

use crate::data::RunningTotal;
use crate::id::PlayerId;

/// One player's score over the game, as `(sample index, score)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub player_id: PlayerId,
    pub points: Vec<(usize, i64)>,
}

/// Per-player score history rebuilt from the service's running totals.
///
/// Each running total only names the players whose score changed at that
/// moment, so every series carries its last known score forward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTimeline {
    pub times: Vec<String>,
    pub series: Vec<Series>,
}

impl ScoreTimeline {
    pub fn from_running_totals(totals: &[RunningTotal]) -> Self {
        let times = totals.iter().map(|total| total.time.clone()).collect();
        let player_ids: BTreeSet<&PlayerId> =
            totals.iter().flat_map(|total| total.scores.keys()).collect();

        let series = player_ids
            .into_iter()
            .map(|player_id| {
                let mut last = None;
                let mut points = Vec::with_capacity(totals.len());
                for (index, total) in totals.iter().enumerate() {
                    if let Some(score) = total.scores.get(player_id) {
                        last = Some(*score);
                    }
                    if let Some(score) = last {
                        points.push((index, score));
                    }
                }
                Series {
                    player_id: player_id.clone(),
                    points,
                }
            })
            .collect();

        Self { times, series }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Lowest and highest score reached by anyone.
    pub fn score_range(&self) -> Option<(i64, i64)> {
        let scores = self
            .series
            .iter()
            .flat_map(|series| series.points.iter().map(|(_, score)| *score));
        scores.fold(None, |range, score| match range {
            None => Some((score, score)),
            Some((low, high)) => Some((low.min(score), high.max(score))),
        })
    }

    /// SVG `points` attribute for each series, scaled into a
    /// `width` x `height` box with y growing downwards.
    pub fn polylines(&self, width: f64, height: f64) -> Vec<(PlayerId, String)> {
        let Some((low, high)) = self.score_range() else {
            return Vec::new();
        };
        let last_index = self.times.len().saturating_sub(1).max(1) as f64;
        let span = (high - low) as f64;

        self.series
            .iter()
            .map(|series| {
                let points = series
                    .points
                    .iter()
                    .map(|(index, score)| {
                        let x = *index as f64 / last_index * width;
                        let y = if span == 0.0 {
                            height / 2.0
                        } else {
                            height - (*score - low) as f64 / span * height
                        };
                        format!("{x:.1},{y:.1}")
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                (series.player_id.clone(), points)
            })
            .collect()
    }
}

/// Formats a `0.0..=1.0` ratio as a percentage.
///
/// ```
/// use restartup::review::success_percent;
///
/// assert_eq!(success_percent(0.5), "50.0%");
/// ```
pub fn success_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> Vec<RunningTotal> {
        serde_json::from_str(
            r#"[
                {"time": "2023-03-01T10:00:00"},
                {"time": "2023-03-01T10:00:01", "p1": 10},
                {"time": "2023-03-01T10:00:02", "p2": -5},
                {"time": "2023-03-01T10:00:03", "p1": 30}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_scores_carry_forward() {
        let timeline = ScoreTimeline::from_running_totals(&totals());
        assert_eq!(timeline.times.len(), 4);
        assert_eq!(timeline.series.len(), 2);

        let p1 = &timeline.series[0];
        assert_eq!(p1.player_id.as_str(), "p1");
        assert_eq!(p1.points, vec![(1, 10), (2, 10), (3, 30)]);

        let p2 = &timeline.series[1];
        assert_eq!(p2.points, vec![(2, -5), (3, -5)]);
    }

    #[test]
    fn test_score_range() {
        let timeline = ScoreTimeline::from_running_totals(&totals());
        assert_eq!(timeline.score_range(), Some((-5, 30)));
        assert_eq!(ScoreTimeline::default().score_range(), None);
    }

    #[test]
    fn test_polylines_fit_the_box() {
        let timeline = ScoreTimeline::from_running_totals(&totals());
        let lines = timeline.polylines(300.0, 100.0);
        assert_eq!(lines.len(), 2);

        // p1 ends at the top right corner with the highest score
        assert!(lines[0].1.ends_with("300.0,0.0"));
        // p2 sits on the bottom edge with the lowest score
        assert!(lines[1].1.starts_with("200.0,100.0"));
    }

    #[test]
    fn test_flat_scores_draw_mid_line() {
        let totals: Vec<RunningTotal> =
            serde_json::from_str(r#"[{"time": "t0", "p1": 0}]"#).unwrap();
        let lines = ScoreTimeline::from_running_totals(&totals).polylines(10.0, 10.0);
        assert_eq!(lines[0].1, "0.0,5.0");
    }

    #[test]
    fn test_success_percent() {
        assert_eq!(success_percent(0.0), "0.0%");
        assert_eq!(success_percent(0.755), "75.5%");
        assert_eq!(success_percent(1.0), "100.0%");
    }
}
