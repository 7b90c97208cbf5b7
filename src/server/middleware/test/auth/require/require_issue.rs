use super::*;

use test_utils::factory::helpers::create_issue_with_dependencies;

/// Tests the reporting client user and the managing account manager see the issue.
///
/// Expected: Ok(User) for both
#[tokio::test]
async fn reporter_and_manager_view_issue() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (manager, _client, reporter, issue) = create_issue_with_dependencies(db).await?;
    let guard = AuthGuard::new(db, session);

    AuthSession::new(session).set_user_id(reporter.id).await?;
    assert!(guard.require(&[Permission::ViewIssue(issue.id)]).await.is_ok());

    AuthSession::new(session).set_user_id(manager.id).await?;
    assert!(guard.require(&[Permission::ViewIssue(issue.id)]).await.is_ok());

    Ok(())
}

/// Tests an issue outside the user's scope is hidden rather than forbidden.
///
/// A developer who is not the assignee and an account manager of another client
/// both get 404, never 403.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn invisible_issue_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_manager, _client, _reporter, issue) = create_issue_with_dependencies(db).await?;

    login(db, session, "DEVELOPER", None).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::DeleteIssue(issue.id)])
        .await;
    assert!(is_not_found(&result));

    login(db, session, "ACCOUNT_MANAGER", None).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::ViewIssue(issue.id)])
        .await;
    assert!(is_not_found(&result));

    Ok(())
}

/// Tests the assigned developer may change status but not edit, assign, or delete.
///
/// Expected: Ok for ChangeIssueStatus, Err(AccessDenied) for the rest
#[tokio::test]
async fn assignee_changes_status_only() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_manager, client, reporter, _issue) = create_issue_with_dependencies(db).await?;
    let developer = login(db, session, "DEVELOPER", None).await?;
    let issue = factory::issue::IssueFactory::new(db, client.id, reporter.id)
        .assignee_id(Some(developer.id))
        .build()
        .await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard
        .require(&[Permission::ViewIssue(issue.id), Permission::ChangeIssueStatus(issue.id)])
        .await
        .is_ok());
    assert!(is_access_denied(
        &guard.require(&[Permission::EditIssue(issue.id)]).await
    ));
    assert!(is_access_denied(
        &guard.require(&[Permission::AssignIssue(issue.id)]).await
    ));
    assert!(is_access_denied(
        &guard.require(&[Permission::DeleteIssue(issue.id)]).await
    ));

    Ok(())
}

/// Tests the reporter may edit the issue but neither assign nor delete it.
///
/// Expected: Ok for EditIssue, Err(AccessDenied) for AssignIssue and DeleteIssue
#[tokio::test]
async fn reporter_edits_but_cannot_assign() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_manager, _client, reporter, issue) = create_issue_with_dependencies(db).await?;
    AuthSession::new(session).set_user_id(reporter.id).await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::EditIssue(issue.id)]).await.is_ok());
    assert!(is_access_denied(
        &guard.require(&[Permission::AssignIssue(issue.id)]).await
    ));
    assert!(is_access_denied(
        &guard.require(&[Permission::DeleteIssue(issue.id)]).await
    ));

    Ok(())
}

/// Tests the managing account manager holds every issue permission.
///
/// Expected: Ok(User)
#[tokio::test]
async fn manager_holds_all_issue_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (manager, _client, _reporter, issue) = create_issue_with_dependencies(db).await?;
    AuthSession::new(session).set_user_id(manager.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[
            Permission::EditIssue(issue.id),
            Permission::AssignIssue(issue.id),
            Permission::ChangeIssueStatus(issue.id),
            Permission::DeleteIssue(issue.id),
        ])
        .await?;

    assert_eq!(user.id, manager.id);

    Ok(())
}
