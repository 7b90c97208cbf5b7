use super::*;

/// Expected: Ok(true) and the issue is gone
#[tokio::test]
async fn deletes_issue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, issue) = factory::helpers::create_issue_with_dependencies(db).await?;
    let repo = IssueRepository::new(db);

    assert!(repo.delete(issue.id).await?);
    assert!(repo.find_by_id(issue.id).await?.is_none());
    assert!(!repo.delete(issue.id).await?);

    Ok(())
}
