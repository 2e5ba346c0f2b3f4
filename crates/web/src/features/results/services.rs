use storage::{
    Database,
    dto::score_record::{ResultFilter, SubmitResultRequest},
    error::{Result, StorageError},
    models::ScoreRecord,
    repository::{
        college::CollegeRepository, event::EventRepository, score_record::ScoreRecordRepository,
    },
};
use uuid::Uuid;

use crate::error::WebError;
use crate::features::leaderboard::{hub::LeaderboardHub, services::refresh_standings};

/// The only write path into the score ledger: commit the mutation, then
/// recompute and broadcast. A failed mutation aborts before any
/// recomputation, so no spurious snapshot goes out.
pub async fn submit_result(
    db: &Database,
    hub: &LeaderboardHub,
    req: &SubmitResultRequest,
) -> std::result::Result<ScoreRecord, WebError> {
    let pool = db.pool();

    EventRepository::new(pool)
        .find_by_id(req.event_id)
        .await
        .map_err(|e| map_not_found(e, "Event not found"))?;
    CollegeRepository::new(pool)
        .find_by_id(req.college_id)
        .await
        .map_err(|e| map_not_found(e, "College not found"))?;

    let record = ScoreRecordRepository::new(pool).create(req).await?;
    tracing::info!(record_id = %record.record_id, points = record.points, "result submitted");

    refresh_standings(db, hub).await?;

    Ok(record)
}

/// Retract a previously submitted result, then recompute and broadcast.
pub async fn retract_result(
    db: &Database,
    hub: &LeaderboardHub,
    record_id: Uuid,
) -> std::result::Result<(), WebError> {
    ScoreRecordRepository::new(db.pool())
        .delete(record_id)
        .await
        .map_err(|e| map_not_found(e, "Result not found"))?;
    tracing::info!(%record_id, "result retracted");

    refresh_standings(db, hub).await?;

    Ok(())
}

pub async fn list_results(db: &Database, filter: &ResultFilter) -> Result<Vec<ScoreRecord>> {
    let repo = ScoreRecordRepository::new(db.pool());

    match filter.event_id {
        Some(event_id) => repo.list_by_event(event_id).await,
        None => repo.list_all().await,
    }
}

fn map_not_found(err: StorageError, message: &str) -> WebError {
    match err {
        StorageError::NotFound => WebError::NotFound(message.to_string()),
        other => WebError::Storage(other),
    }
}
