use super::*;

/// Tests an admin passes the admin and staff checks.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = login(db, session, "ADMIN", None).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin, Permission::Staff])
        .await?;

    assert_eq!(user.id, admin.id);

    Ok(())
}

/// Tests every non-admin role is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_other_roles() -> Result<(), AppError> {
    for role in ["ACCOUNT_MANAGER", "DEVELOPER", "CLIENT", "USER"] {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        login(db, session, role, None).await?;

        let result = AuthGuard::new(db, session).require(&[Permission::Admin]).await;

        assert!(is_access_denied(&result), "role {} passed", role);
    }

    Ok(())
}

/// Tests the staff permission covers developers but not clients.
///
/// Expected: Ok for DEVELOPER, Err(AccessDenied) for CLIENT
#[tokio::test]
async fn staff_permission_by_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    login(db, session, "DEVELOPER", None).await?;
    assert!(AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await
        .is_ok());

    login(db, session, "CLIENT", None).await?;
    let result = AuthGuard::new(db, session).require(&[Permission::Staff]).await;
    assert!(is_access_denied(&result));

    Ok(())
}
