use super::*;

/// Tests selecting issues for due-soon notifications.
///
/// Expected: Ok with the due-soon and overdue issues only
#[tokio::test]
async fn selects_unnotified_unfinished_issues_before_cutoff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let reporter = factory::create_user(db).await?;
    let now = Utc::now();

    let build = |due: Option<chrono::DateTime<Utc>>| {
        factory::issue::IssueFactory::new(db, client.id, reporter.id).due_date(due)
    };

    let soon = build(Some(now + Duration::hours(3))).build().await?;
    let overdue = build(Some(now - Duration::hours(1))).build().await?;
    build(Some(now + Duration::days(3))).build().await?;
    build(None).build().await?;
    build(Some(now + Duration::hours(1)))
        .status("RESOLVED")
        .build()
        .await?;
    build(Some(now + Duration::hours(1)))
        .due_notified_at(Some(now))
        .build()
        .await?;

    let due = IssueRepository::new(db)
        .find_due_unnotified(now + Duration::hours(24))
        .await?;

    let ids: Vec<_> = due.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![overdue.id, soon.id]);

    Ok(())
}

/// Expected: Ok and the issue is no longer selected after being marked
#[tokio::test]
async fn mark_due_notified_excludes_issue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let reporter = factory::create_user(db).await?;
    let now = Utc::now();
    let issue = factory::issue::IssueFactory::new(db, client.id, reporter.id)
        .due_date(Some(now + Duration::hours(1)))
        .build()
        .await?;

    let repo = IssueRepository::new(db);
    repo.mark_due_notified(issue.id, now).await?;

    assert!(repo.find_due_unnotified(now + Duration::hours(24)).await?.is_empty());
    assert!(repo.find_by_id(issue.id).await?.unwrap().due_notified_at.is_some());

    Ok(())
}
