use super::*;

/// Expected: Ok with the new status stored
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, issue) = factory::helpers::create_issue_with_dependencies(db).await?;
    let repo = IssueRepository::new(db);

    repo.update_status(issue.id, IssueStatus::InProgress).await?;

    let reloaded = repo.find_by_id(issue.id).await?.unwrap();
    assert_eq!(reloaded.status, IssueStatus::InProgress);

    Ok(())
}

/// Expected: Ok with the assignee set, then cleared
#[tokio::test]
async fn sets_and_clears_assignee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, issue) = factory::helpers::create_issue_with_dependencies(db).await?;
    let developer = factory::create_user_with_role(db, "DEVELOPER").await?;
    let repo = IssueRepository::new(db);

    let assigned = repo
        .update_assignee(issue.id, Some(developer.id))
        .await?
        .unwrap();
    assert_eq!(assigned.assignee_id, Some(developer.id));

    let cleared = repo.update_assignee(issue.id, None).await?.unwrap();
    assert_eq!(cleared.assignee_id, None);

    Ok(())
}

/// Expected: Ok(None) for unknown issues
#[tokio::test]
async fn returns_none_for_missing_issue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = IssueRepository::new(db);

    assert!(repo.update_status(7, IssueStatus::Closed).await?.is_none());
    assert!(repo.update_assignee(7, None).await?.is_none());

    Ok(())
}
