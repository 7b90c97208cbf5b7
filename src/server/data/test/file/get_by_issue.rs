use super::*;

/// Expected: Ok with only the issue's files; deleting removes one
#[tokio::test]
async fn lists_and_deletes_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, client, reporter, issue) = factory::helpers::create_issue_with_dependencies(db).await?;
    let other = factory::create_issue(db, client.id, reporter.id).await?;

    let first = factory::create_file(db, issue.id, reporter.id).await?;
    let second = factory::create_file(db, issue.id, reporter.id).await?;
    factory::create_file(db, other.id, reporter.id).await?;

    let repo = FileRepository::new(db);
    assert_eq!(repo.get_by_issue(issue.id).await?.len(), 2);

    assert!(repo.delete(first.id).await?);
    let remaining = repo.get_by_issue(issue.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    Ok(())
}
