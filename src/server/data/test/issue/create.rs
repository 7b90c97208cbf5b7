use super::*;

/// Expected: Ok with OPEN status and the requested priority
#[tokio::test]
async fn creates_open_issue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let reporter = factory::create_user_with_role(db, "CLIENT").await?;
    let due = Utc::now() + Duration::days(3);

    let issue = IssueRepository::new(db)
        .create(CreateIssueParam {
            client_id: client.id,
            title: "Checkout fails".to_string(),
            description: "500 on submit".to_string(),
            priority: IssuePriority::High,
            reporter_id: reporter.id,
            assignee_id: None,
            due_date: Some(due),
        })
        .await?;

    assert_eq!(issue.status, IssueStatus::Open);
    assert_eq!(issue.priority, IssuePriority::High);
    assert_eq!(issue.reporter_id, reporter.id);
    assert_eq!(issue.due_date.map(|d| d.timestamp()), Some(due.timestamp()));
    assert_eq!(issue.due_notified_at, None);

    Ok(())
}
