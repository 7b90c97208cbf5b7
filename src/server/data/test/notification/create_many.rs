use super::*;

/// Expected: Ok(2) and both recipients have one unread notification
#[tokio::test]
async fn inserts_unread_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (manager, _, reporter, issue) = factory::helpers::create_issue_with_dependencies(db).await?;

    let repo = NotificationRepository::new(db);
    let inserted = repo
        .create_many(
            [manager.id, reporter.id]
                .into_iter()
                .map(|user_id| CreateNotificationParam {
                    user_id,
                    issue_id: Some(issue.id),
                    kind: NotificationKind::StatusChanged,
                    message: "Status changed".to_string(),
                })
                .collect(),
        )
        .await?;

    assert_eq!(inserted, 2);
    assert_eq!(repo.count_unread(manager.id).await?, 1);
    assert_eq!(repo.count_unread(reporter.id).await?, 1);

    Ok(())
}

/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(NotificationRepository::new(db).create_many(vec![]).await?, 0);

    Ok(())
}
