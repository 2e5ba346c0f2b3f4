use sqlx::PgPool;
use storage::{
    Database,
    dto::leaderboard::{LeaderboardEntry, LeaderboardSnapshot},
    error::Result,
    repository::{college::CollegeRepository, score_record::ScoreRecordRepository},
    services::standings::compute_standings,
};

use super::hub::LeaderboardHub;

/// Compute the current standings from committed state. Totals are always
/// derived from the ledger, never read from a stored counter.
pub async fn current_standings(pool: &PgPool) -> Result<Vec<LeaderboardEntry>> {
    let colleges = CollegeRepository::new(pool).list().await?;
    let records = ScoreRecordRepository::new(pool).list_all().await?;

    Ok(compute_standings(&colleges, &records))
}

/// Recompute the standings and fan the fresh snapshot out to every viewer.
///
/// The hub's refresh guard is held across the ledger read, so two concurrent
/// mutations cannot interleave into an out-of-order or torn publish. Called
/// after every committed mutation that can change the ranking.
pub async fn refresh_standings(db: &Database, hub: &LeaderboardHub) -> Result<LeaderboardSnapshot> {
    let _guard = hub.refresh_guard().await;

    let entries = current_standings(db.pool()).await?;
    Ok(hub.publish(entries))
}
