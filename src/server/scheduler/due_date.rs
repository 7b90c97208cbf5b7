use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::notification::NotificationService};

/// Every 15 minutes, on the quarter hour.
const DUE_DATE_SCHEDULE: &str = "0 */15 * * * *";

/// Starts the due-date reminder scheduler.
///
/// Every run looks for unfinished issues whose due date falls within `due_soon_hours`
/// and notifies their assignee, or the reporter when nobody is assigned. Each issue is
/// notified once per due date.
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; dropping it does not stop the job
/// - `Err(AppError::SchedulerErr)` - Failed to create or start the scheduler
pub async fn start_scheduler(
    db: DatabaseConnection,
    due_soon_hours: i64,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(DUE_DATE_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = process_due_dates(&db, due_soon_hours).await {
                tracing::error!("Error processing due date reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Due date scheduler started");

    Ok(scheduler)
}

async fn process_due_dates(db: &DatabaseConnection, due_soon_hours: i64) -> Result<(), AppError> {
    let sent = NotificationService::new(db)
        .process_due_soon(Utc::now(), Duration::hours(due_soon_hours))
        .await?;

    if sent > 0 {
        tracing::info!("Sent {} due date notifications", sent);
    }

    Ok(())
}
