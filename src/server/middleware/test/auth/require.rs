use super::*;

mod require_admin;
mod require_client;
mod require_comment_file;
mod require_domain;
mod require_issue;

/// Tests an empty session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_when_no_user_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_session_user_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests an empty permission list only requires a logged-in user.
///
/// Expected: Ok(User) even for the unapproved USER role
#[tokio::test]
async fn returns_session_user_without_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = login(db, session, "USER", None).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.email, user.email);

    Ok(())
}

/// Tests that every listed permission must hold.
///
/// The account manager manages the first client but not the second.
///
/// Expected: Ok for the owned client alone, Err(AccessDenied) once the other is added
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manager = login(db, session, "ACCOUNT_MANAGER", None).await?;
    let owned = factory::create_client(db, Some(manager.id)).await?;
    let other = factory::create_client(db, None).await?;

    let guard = AuthGuard::new(db, session);

    let result = guard
        .require(&[Permission::Staff, Permission::ManageClient(owned.id)])
        .await;
    assert!(result.is_ok());

    let result = guard
        .require(&[
            Permission::ManageClient(owned.id),
            Permission::ManageClient(other.id),
        ])
        .await;
    assert!(is_access_denied(&result));

    Ok(())
}
