//! Recent-match trend series.

use serde::{Deserialize, Serialize};

use super::round2;
use crate::models::Match;

/// How many recent matches a trend series covers.
pub const TREND_WINDOW: usize = 5;

/// A labelled series of per-match values.
///
/// Labels are position-based (`M1`..`M5`), not date-based, and stay
/// index-aligned with `values`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl TrendSeries {
    fn from_values(values: Vec<f64>) -> Self {
        let labels = (1..=values.len()).map(|i| format!("M{}", i)).collect();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The last [`TREND_WINDOW`] matches in date order, oldest first.
/// Sorts a copy; the input slice is never reordered.
fn recent_window(matches: &[Match]) -> Vec<&Match> {
    let mut ordered: Vec<&Match> = matches.iter().collect();
    ordered.sort_by_key(|m| m.date);
    let skip = ordered.len().saturating_sub(TREND_WINDOW);
    ordered.split_off(skip)
}

/// Runs scored per match over the recent window.
pub fn runs_per_match(matches: &[Match]) -> TrendSeries {
    let values = recent_window(matches)
        .iter()
        .map(|m| m.batting_runs() as f64)
        .collect();
    TrendSeries::from_values(values)
}

/// Run rate per match over the recent window:
/// (batting runs + wides + no-balls) / overs bowled, 0 when no overs.
pub fn run_rate_series(matches: &[Match]) -> TrendSeries {
    let values = recent_window(matches)
        .iter()
        .map(|m| {
            let overs = m.overs_bowled();
            if overs == 0.0 {
                0.0
            } else {
                round2((m.batting_runs() + m.extras()) as f64 / overs)
            }
        })
        .collect();
    TrendSeries::from_values(values)
}

/// Extras as a fraction of total runs, across ALL matches.
///
/// total_extras / (total_extras + batting runs); 0 when no runs exist.
/// The result is a fraction in [0,1]; consumers display it as a percentage.
pub fn extras_ratio(matches: &[Match]) -> f64 {
    let total_extras: u32 = matches.iter().map(|m| m.extras()).sum();
    let total_runs = total_extras + matches.iter().map(|m| m.batting_runs()).sum::<u32>();
    if total_runs == 0 {
        0.0
    } else {
        round2(total_extras as f64 / total_runs as f64)
    }
}
