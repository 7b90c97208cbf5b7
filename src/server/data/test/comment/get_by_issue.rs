use super::*;

/// Expected: Ok with the issue's comments oldest first, excluding other issues
#[tokio::test]
async fn returns_issue_comments_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, client, reporter, issue) = factory::helpers::create_issue_with_dependencies(db).await?;
    let other = factory::create_issue(db, client.id, reporter.id).await?;

    let first = factory::create_comment(db, issue.id, reporter.id).await?;
    let second = factory::create_comment(db, issue.id, reporter.id).await?;
    factory::create_comment(db, other.id, reporter.id).await?;

    let comments = CommentRepository::new(db).get_by_issue(issue.id).await?;

    let ids: Vec<_> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
