//! Tournament standings computation.

use crate::models::{Match, MatchResult, Standing};

/// Build a tournament table from its matches.
///
/// Both sides of every match gain a `played`. A win is worth 2 points to
/// the winner, a draw 1 point to each side. The table sorts by points
/// descending, then wins descending, and positions are 1-based.
/// Zero matches yields an empty table.
pub fn compute_standings(matches: &[Match]) -> Vec<Standing> {
    // Accumulate in first-seen order so equal records rank deterministically.
    let mut table: Vec<Standing> = Vec::new();

    for m in matches {
        let home = m.home_team().to_string();
        let away = m.opponent.clone();

        let home_idx = find_or_insert(&mut table, home);
        table[home_idx].played += 1;
        match m.result {
            MatchResult::Win => {
                table[home_idx].won += 1;
                table[home_idx].points += 2;
            }
            MatchResult::Loss => table[home_idx].lost += 1,
            MatchResult::Draw => {
                table[home_idx].draw += 1;
                table[home_idx].points += 1;
            }
        }

        let away_idx = find_or_insert(&mut table, away);
        table[away_idx].played += 1;
        match m.result {
            MatchResult::Win => table[away_idx].lost += 1,
            MatchResult::Loss => {
                table[away_idx].won += 1;
                table[away_idx].points += 2;
            }
            MatchResult::Draw => {
                table[away_idx].draw += 1;
                table[away_idx].points += 1;
            }
        }
    }

    table.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| b.won.cmp(&a.won)));
    for (i, row) in table.iter_mut().enumerate() {
        row.position = (i + 1) as u32;
    }
    table
}

fn find_or_insert(table: &mut Vec<Standing>, team: String) -> usize {
    if let Some(idx) = table.iter().position(|s| s.team == team) {
        idx
    } else {
        table.push(Standing {
            team,
            ..Default::default()
        });
        table.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn match_between(team1: &str, opponent: &str, day: u32, result: MatchResult) -> Match {
        Match::new(
            NaiveDate::from_ymd_opt(2026, 6, day).unwrap(),
            opponent.to_string(),
            result,
        )
        .with_team1(team1.to_string())
    }

    #[test]
    fn test_standings_win_and_draw() {
        let matches = vec![
            match_between("A", "B", 1, MatchResult::Win),
            match_between("A", "B", 2, MatchResult::Draw),
        ];

        let table = compute_standings(&matches);

        assert_eq!(table.len(), 2);
        let a = &table[0];
        assert_eq!(a.team, "A");
        assert_eq!(a.played, 2);
        assert_eq!(a.won, 1);
        assert_eq!(a.draw, 1);
        assert_eq!(a.lost, 0);
        assert_eq!(a.points, 3);
        assert_eq!(a.position, 1);

        let b = &table[1];
        assert_eq!(b.team, "B");
        assert_eq!(b.played, 2);
        assert_eq!(b.lost, 1);
        assert_eq!(b.draw, 1);
        assert_eq!(b.points, 1);
        assert_eq!(b.position, 2);
    }

    #[test]
    fn test_standings_loss_credits_opponent() {
        let matches = vec![match_between("A", "B", 1, MatchResult::Loss)];

        let table = compute_standings(&matches);

        assert_eq!(table[0].team, "B");
        assert_eq!(table[0].won, 1);
        assert_eq!(table[0].points, 2);
        assert_eq!(table[1].team, "A");
        assert_eq!(table[1].lost, 1);
        assert_eq!(table[1].points, 0);
    }

    #[test]
    fn test_standings_tie_broken_by_wins() {
        // C: 1 win 0 draw (2 pts); D: 0 win 2 draw (2 pts)
        let matches = vec![
            match_between("C", "D", 1, MatchResult::Win),
            match_between("D", "E", 2, MatchResult::Draw),
            match_between("D", "F", 3, MatchResult::Draw),
        ];

        let table = compute_standings(&matches);

        assert_eq!(table[0].team, "C");
        assert_eq!(table[1].team, "D");
        assert_eq!(table[0].points, table[1].points);
    }

    #[test]
    fn test_standings_empty() {
        let table = compute_standings(&[]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_standings_default_team_placeholder() {
        let m = Match::new(
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            "B".to_string(),
            MatchResult::Win,
        );

        let table = compute_standings(&[m]);

        assert_eq!(table[0].team, crate::models::HOME_TEAM_PLACEHOLDER);
        assert_eq!(table[0].won, 1);
    }

    #[test]
    fn test_standings_positions_are_one_based() {
        let matches = vec![
            match_between("A", "B", 1, MatchResult::Win),
            match_between("C", "D", 2, MatchResult::Draw),
        ];

        let table = compute_standings(&matches);
        let positions: Vec<u32> = table.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }
}
