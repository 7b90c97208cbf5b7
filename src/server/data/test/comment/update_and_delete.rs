use super::*;

/// Expected: Ok(Some) with the new body
#[tokio::test]
async fn updates_body() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, reporter, issue) = factory::helpers::create_issue_with_dependencies(db).await?;
    let comment = factory::create_comment(db, issue.id, reporter.id).await?;

    let updated = CommentRepository::new(db)
        .update(comment.id, "Edited".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.body, "Edited");
    assert!(updated.updated_at >= updated.created_at);

    Ok(())
}

/// Expected: Ok(true) then Ok(None) on lookup
#[tokio::test]
async fn deletes_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, reporter, issue) = factory::helpers::create_issue_with_dependencies(db).await?;
    let comment = factory::create_comment(db, issue.id, reporter.id).await?;
    let repo = CommentRepository::new(db);

    assert!(repo.delete(comment.id).await?);
    assert!(repo.find_by_id(comment.id).await?.is_none());

    Ok(())
}
