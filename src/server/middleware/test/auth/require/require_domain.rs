use super::*;

/// Tests domain management follows client management.
///
/// Expected: Ok for the managing account manager, Err(AccessDenied) for a developer
#[tokio::test]
async fn domain_follows_client_management() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manager = login(db, session, "ACCOUNT_MANAGER", None).await?;
    let client = factory::create_client(db, Some(manager.id)).await?;
    let domain = factory::create_domain_name(db, client.id).await?;

    assert!(AuthGuard::new(db, session)
        .require(&[Permission::ManageDomain(domain.id)])
        .await
        .is_ok());

    login(db, session, "DEVELOPER", None).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::ManageDomain(domain.id)])
        .await;
    assert!(is_access_denied(&result));

    Ok(())
}

/// Tests a domain of another client is hidden from a client user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn foreign_domain_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let own = factory::create_client(db, None).await?;
    let other = factory::create_client(db, None).await?;
    let domain = factory::create_domain_name(db, other.id).await?;
    login(db, session, "CLIENT", Some(own.id)).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ManageDomain(domain.id)])
        .await;

    assert!(is_not_found(&result));

    Ok(())
}

/// Tests a failing client lookup is not reported as a missing domain.
///
/// The client table is dropped after the domain is created, so loading the client
/// fails inside the database.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn database_error_is_not_masked_as_not_found() -> Result<(), AppError> {
    use sea_orm::ConnectionTrait;

    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let client = factory::create_client(db, None).await?;
    let domain = factory::create_domain_name(db, client.id).await?;
    login(db, session, "ADMIN", None).await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    db.execute_unprepared("DROP TABLE client").await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ManageDomain(domain.id)])
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
