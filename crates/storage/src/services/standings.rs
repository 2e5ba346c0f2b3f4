use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::leaderboard::LeaderboardEntry;
use crate::models::{College, ScoreRecord};

/// Computes the full standings from the current colleges and the full score
/// ledger. Pure: no side effects, no failure modes, safe to call on every
/// mutation.
///
/// Every college appears, including those with no records (at 0 points).
/// Ordering is total points descending; equal totals order by college code
/// ascending so tied colleges do not jitter between recomputations. Ranks are
/// dense: tied colleges share a rank number, the next strictly lower total
/// follows at rank + 1.
pub fn compute_standings(colleges: &[College], records: &[ScoreRecord]) -> Vec<LeaderboardEntry> {
    let mut totals: HashMap<Uuid, i64> = HashMap::with_capacity(colleges.len());
    for record in records {
        *totals.entry(record.college_id).or_insert(0) += i64::from(record.points);
    }

    let mut entries: Vec<LeaderboardEntry> = colleges
        .iter()
        .map(|college| LeaderboardEntry {
            rank: 0,
            college_id: college.college_id,
            college_name: college.name.clone(),
            college_code: college.code.clone(),
            total_points: totals.get(&college.college_id).copied().unwrap_or(0),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.college_code.cmp(&b.college_code))
    });

    let mut rank = 0;
    let mut previous_total = None;
    for entry in &mut entries {
        if previous_total != Some(entry.total_points) {
            rank += 1;
            previous_total = Some(entry.total_points);
        }
        entry.rank = rank;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college(name: &str, code: &str) -> College {
        College {
            college_id: Uuid::new_v4(),
            name: name.to_string(),
            code: code.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    fn record(college_id: Uuid, points: i32) -> ScoreRecord {
        ScoreRecord {
            record_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            college_id,
            points,
            justification: "win".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn empty_college_set_yields_empty_standings() {
        assert!(compute_standings(&[], &[]).is_empty());
    }

    #[test]
    fn colleges_without_records_rank_at_zero() {
        let colleges = vec![college("Alpha", "ALP"), college("Beta", "BET")];
        let standings = compute_standings(&colleges, &[]);

        assert_eq!(standings.len(), 2);
        assert!(standings.iter().all(|e| e.total_points == 0));
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].rank, 1);
    }

    #[test]
    fn totals_are_summed_per_college() {
        let a = college("Alpha", "ALP");
        let records = vec![
            record(a.college_id, 50),
            record(a.college_id, 30),
            record(a.college_id, 20),
        ];

        let standings = compute_standings(&[a], &records);
        assert_eq!(standings[0].total_points, 100);
    }

    #[test]
    fn ordered_by_points_descending() {
        let a = college("Alpha", "ALP");
        let b = college("Beta", "BET");
        let records = vec![record(a.college_id, 100), record(b.college_id, 150)];

        let standings = compute_standings(&[a.clone(), b.clone()], &records);

        assert_eq!(standings[0].college_id, b.college_id);
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].college_id, a.college_id);
        assert_eq!(standings[1].rank, 2);
    }

    #[test]
    fn ties_share_a_dense_rank_and_order_by_code() {
        let a = college("Alpha", "ALP");
        let b = college("Beta", "BET");
        let c = college("Gamma", "GAM");
        let records = vec![
            record(a.college_id, 100),
            record(b.college_id, 100),
            record(c.college_id, 40),
        ];

        let standings = compute_standings(&[c.clone(), b.clone(), a.clone()], &records);

        assert_eq!(standings[0].college_code, "ALP");
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].college_code, "BET");
        assert_eq!(standings[1].rank, 1);
        assert_eq!(standings[2].college_code, "GAM");
        assert_eq!(standings[2].rank, 2);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let a = college("Alpha", "ALP");
        let b = college("Beta", "BET");
        let colleges = vec![a.clone(), b.clone()];
        let records = vec![record(a.college_id, 75), record(b.college_id, 75)];

        let first = compute_standings(&colleges, &records);
        let second = compute_standings(&colleges, &records);

        assert_eq!(first, second);
    }

    #[test]
    fn retracting_a_record_restores_previous_totals() {
        let a = college("Alpha", "ALP");
        let b = college("Beta", "BET");
        let colleges = vec![a.clone(), b.clone()];

        let before = compute_standings(&colleges, &[record(b.college_id, 150)]);

        let submitted = record(a.college_id, 100);
        let mut records = vec![record(b.college_id, 150), submitted.clone()];
        let during = compute_standings(&colleges, &records);
        assert_eq!(during[1].total_points, 100);

        records.retain(|r| r.record_id != submitted.record_id);
        let after = compute_standings(&colleges, &records);

        assert_eq!(before, after);
    }

    #[test]
    fn submit_and_retract_scenario() {
        let a = college("Anand", "A");
        let b = college("Bharat", "B");
        let colleges = vec![a.clone(), b.clone()];

        let first = record(a.college_id, 100);
        let standings = compute_standings(&colleges, std::slice::from_ref(&first));
        assert_eq!(standings[0].college_id, a.college_id);
        assert_eq!(standings[0].total_points, 100);
        assert_eq!(standings[1].total_points, 0);

        let second = record(b.college_id, 150);
        let standings = compute_standings(&colleges, &[first.clone(), second.clone()]);
        assert_eq!(standings[0].college_id, b.college_id);
        assert_eq!(standings[0].total_points, 150);
        assert_eq!(standings[1].college_id, a.college_id);
        assert_eq!(standings[1].total_points, 100);

        let standings = compute_standings(&colleges, &[second]);
        assert_eq!(standings[0].college_id, b.college_id);
        assert_eq!(standings[0].total_points, 150);
        assert_eq!(standings[1].college_id, a.college_id);
        assert_eq!(standings[1].total_points, 0);
    }

    #[test]
    fn records_for_unknown_colleges_do_not_create_entries() {
        let a = college("Alpha", "ALP");
        let stray = record(Uuid::new_v4(), 500);

        let standings = compute_standings(std::slice::from_ref(&a), &[stray]);

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].college_id, a.college_id);
    }
}
