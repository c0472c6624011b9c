//! Career statistic formulas.

use crate::models::{Performance, PlayerStats};

/// Round to 2 decimal places, half-up.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Batting strike rate: runs per 100 balls faced.
pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        0.0
    } else {
        round2(runs as f64 / balls as f64 * 100.0)
    }
}

/// Batting average: runs per match played.
pub fn batting_average(runs: u32, matches: u32) -> f64 {
    if matches == 0 {
        0.0
    } else {
        round2(runs as f64 / matches as f64)
    }
}

/// Bowling average: runs conceded per wicket taken.
pub fn bowling_average(runs_conceded: u32, wickets: u32) -> f64 {
    if wickets == 0 {
        0.0
    } else {
        round2(runs_conceded as f64 / wickets as f64)
    }
}

/// Economy rate: runs conceded per over bowled.
pub fn economy_rate(runs_conceded: u32, overs: f64) -> f64 {
    if overs == 0.0 {
        0.0
    } else {
        round2(runs_conceded as f64 / overs)
    }
}

/// Bowling strike rate: balls bowled per wicket taken.
pub fn bowling_strike_rate(balls: u32, wickets: u32) -> f64 {
    if wickets == 0 {
        0.0
    } else {
        round2(balls as f64 / wickets as f64)
    }
}

/// Fold one match contribution into a career stats record.
///
/// Returns a new record: `matches` increments by 1, every other field is
/// the sum of the current value and the performance's (defaulted) value.
pub fn update_player_stats(current: &PlayerStats, perf: &Performance) -> PlayerStats {
    PlayerStats {
        matches: current.matches + 1,
        runs: current.runs + perf.runs,
        balls: current.balls + perf.balls,
        fours: current.fours + perf.fours,
        sixes: current.sixes + perf.sixes,
        wickets: current.wickets + perf.wickets,
        overs: current.overs + perf.overs,
        runs_conceded: current.runs_conceded + perf.runs_conceded,
        maidens: current.maidens + perf.maidens,
        catches: current.catches + perf.catches,
        stumpings: current.stumpings + perf.stumpings,
        run_outs: current.run_outs + perf.run_outs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(50.0), 50.0);
    }

    #[test]
    fn test_strike_rate() {
        assert_eq!(strike_rate(50, 40), 125.0);
        assert_eq!(strike_rate(33, 27), 122.22);
    }

    #[test]
    fn test_strike_rate_zero_balls() {
        assert_eq!(strike_rate(0, 0), 0.0);
        assert_eq!(strike_rate(99, 0), 0.0);
    }

    #[test]
    fn test_batting_average() {
        assert_eq!(batting_average(340, 12), 28.33);
        assert_eq!(batting_average(100, 0), 0.0);
    }

    #[test]
    fn test_bowling_average_zero_wickets() {
        assert_eq!(bowling_average(120, 0), 0.0);
        assert_eq!(bowling_average(120, 6), 20.0);
    }

    #[test]
    fn test_economy_rate() {
        assert_eq!(economy_rate(45, 10.0), 4.5);
        assert_eq!(economy_rate(45, 0.0), 0.0);
        assert_eq!(economy_rate(22, 3.5), 6.29);
    }

    #[test]
    fn test_bowling_strike_rate_zero_wickets() {
        assert_eq!(bowling_strike_rate(60, 0), 0.0);
        assert_eq!(bowling_strike_rate(60, 4), 15.0);
    }

    #[test]
    fn test_update_player_stats_sums_fields() {
        let current = PlayerStats {
            matches: 4,
            runs: 120,
            balls: 90,
            wickets: 3,
            overs: 12.0,
            runs_conceded: 70,
            catches: 2,
            ..Default::default()
        };
        let perf = Performance {
            runs: 41,
            balls: 30,
            fours: 5,
            wickets: 2,
            overs: 4.0,
            runs_conceded: 22,
            catches: 1,
            ..Performance::new(EntityId::from("p1"), "Ravi".to_string())
        };

        let updated = update_player_stats(&current, &perf);

        assert_eq!(updated.matches, 5);
        assert_eq!(updated.runs, 161);
        assert_eq!(updated.balls, 120);
        assert_eq!(updated.fours, 5);
        assert_eq!(updated.wickets, 5);
        assert_eq!(updated.overs, 16.0);
        assert_eq!(updated.runs_conceded, 92);
        assert_eq!(updated.catches, 3);
    }

    #[test]
    fn test_update_player_stats_empty_performance() {
        let current = PlayerStats {
            matches: 7,
            runs: 210,
            wickets: 9,
            ..Default::default()
        };
        let empty = Performance::new(EntityId::from("p1"), "Ravi".to_string());

        let updated = update_player_stats(&current, &empty);

        // Only matches moves; everything else is unchanged
        assert_eq!(updated.matches, 8);
        assert_eq!(updated.runs, 210);
        assert_eq!(updated.wickets, 9);
        assert_eq!(updated.overs, 0.0);
    }
}
