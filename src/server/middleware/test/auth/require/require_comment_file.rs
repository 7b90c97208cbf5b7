use super::*;

use test_utils::factory::helpers::create_issue_with_dependencies;

/// Tests only the author may edit a comment, while the account manager may delete it.
///
/// Expected: Err(AccessDenied) for the manager editing, Ok for deleting and for the author
#[tokio::test]
async fn comment_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (manager, _client, reporter, issue) = create_issue_with_dependencies(db).await?;
    let comment = factory::create_comment(db, issue.id, reporter.id).await?;
    let guard = AuthGuard::new(db, session);

    AuthSession::new(session).set_user_id(manager.id).await?;
    assert!(is_access_denied(
        &guard.require(&[Permission::EditComment(comment.id)]).await
    ));
    assert!(guard
        .require(&[Permission::DeleteComment(comment.id)])
        .await
        .is_ok());

    AuthSession::new(session).set_user_id(reporter.id).await?;
    assert!(guard
        .require(&[
            Permission::EditComment(comment.id),
            Permission::DeleteComment(comment.id)
        ])
        .await
        .is_ok());

    Ok(())
}

/// Tests a missing comment is reported as not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_comment_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    login(db, session, "ADMIN", None).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::DeleteComment(77)])
        .await;

    assert!(is_not_found(&result));

    Ok(())
}

/// Tests another client user of the same client cannot delete someone else's file.
///
/// Expected: Err(AccessDenied) for the colleague, Ok for the uploader
#[tokio::test]
async fn file_delete_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_manager, client, reporter, issue) = create_issue_with_dependencies(db).await?;
    let file = factory::create_file(db, issue.id, reporter.id).await?;

    login(db, session, "CLIENT", Some(client.id)).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::DeleteFile(file.id)])
        .await;
    assert!(is_access_denied(&result));

    AuthSession::new(session).set_user_id(reporter.id).await?;
    assert!(AuthGuard::new(db, session)
        .require(&[Permission::DeleteFile(file.id)])
        .await
        .is_ok());

    Ok(())
}
