use super::*;

/// Expected: Ok with only the provided fields changed
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, issue) = factory::helpers::create_issue_with_dependencies(db).await?;

    let updated = IssueRepository::new(db)
        .update(
            issue.id,
            UpdateIssueParam {
                title: Some("Renamed".to_string()),
                priority: Some(IssuePriority::Urgent),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.priority, IssuePriority::Urgent);
    assert_eq!(updated.description, issue.description);

    Ok(())
}

/// Tests that moving the due date re-arms the due-soon notification.
///
/// Expected: Ok with the new due date and due_notified_at cleared
#[tokio::test]
async fn changing_due_date_resets_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let reporter = factory::create_user(db).await?;
    let now = Utc::now();
    let issue = factory::issue::IssueFactory::new(db, client.id, reporter.id)
        .due_date(Some(now + Duration::hours(2)))
        .due_notified_at(Some(now))
        .build()
        .await?;

    let new_due = now + Duration::days(5);
    let updated = IssueRepository::new(db)
        .update(
            issue.id,
            UpdateIssueParam {
                due_date: Some(Some(new_due)),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(
        updated.due_date.map(|d| d.timestamp()),
        Some(new_due.timestamp())
    );
    assert_eq!(updated.due_notified_at, None);

    Ok(())
}

/// Expected: Ok with the due date cleared
#[tokio::test]
async fn clears_due_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let reporter = factory::create_user(db).await?;
    let issue = factory::issue::IssueFactory::new(db, client.id, reporter.id)
        .due_date(Some(Utc::now() + Duration::days(1)))
        .build()
        .await?;

    let updated = IssueRepository::new(db)
        .update(
            issue.id,
            UpdateIssueParam {
                due_date: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.due_date, None);

    Ok(())
}
