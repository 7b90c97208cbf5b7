use super::*;

/// Tests a CLIENT user sees only their own client.
///
/// Expected: Ok for the linked client, NotFound for any other
#[tokio::test]
async fn client_user_views_only_own_client() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let own = factory::create_client(db, None).await?;
    let other = factory::create_client(db, None).await?;
    login(db, session, "CLIENT", Some(own.id)).await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::ViewClient(own.id)]).await.is_ok());
    assert!(is_not_found(
        &guard.require(&[Permission::ViewClient(other.id)]).await
    ));

    Ok(())
}

/// Tests a missing client is reported as not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_client_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    login(db, session, "ADMIN", None).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ManageClient(999)])
        .await;

    assert!(is_not_found(&result));

    Ok(())
}

/// Tests developers may view any client but manage none.
///
/// Expected: Ok for ViewClient, Err(AccessDenied) for ManageClient
#[tokio::test]
async fn developer_views_but_cannot_manage() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let client = factory::create_client(db, None).await?;
    login(db, session, "DEVELOPER", None).await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::ViewClient(client.id)]).await.is_ok());
    assert!(is_access_denied(
        &guard.require(&[Permission::ManageClient(client.id)]).await
    ));

    Ok(())
}

/// Tests client creation is limited to admins and account managers.
///
/// Expected: Ok for ACCOUNT_MANAGER, Err(AccessDenied) for DEVELOPER
#[tokio::test]
async fn create_client_by_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    login(db, session, "ACCOUNT_MANAGER", None).await?;
    assert!(AuthGuard::new(db, session)
        .require(&[Permission::CreateClient])
        .await
        .is_ok());

    login(db, session, "DEVELOPER", None).await?;
    assert!(is_access_denied(
        &AuthGuard::new(db, session)
            .require(&[Permission::CreateClient])
            .await
    ));

    Ok(())
}
