use super::*;

/// Expected: Ok with body and author stored
#[tokio::test]
async fn creates_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, reporter, issue) = factory::helpers::create_issue_with_dependencies(db).await?;

    let comment = CommentRepository::new(db)
        .create(issue.id, reporter.id, "Still broken".to_string())
        .await?;

    assert_eq!(comment.issue_id, issue.id);
    assert_eq!(comment.author_id, reporter.id);
    assert_eq!(comment.body, "Still broken");

    Ok(())
}
