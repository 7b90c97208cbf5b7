use super::*;

/// Expected: Ok with admins, account managers and developers only
#[tokio::test]
async fn returns_only_staff_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_role(db, "ADMIN").await?;
    factory::create_user_with_role(db, "ACCOUNT_MANAGER").await?;
    factory::create_user_with_role(db, "DEVELOPER").await?;
    factory::create_user_with_role(db, "CLIENT").await?;
    factory::create_user(db).await?;

    let staff = UserRepository::new(db).get_staff().await?;

    assert_eq!(staff.len(), 3);
    assert!(staff
        .iter()
        .all(|u| matches!(u.role, Role::Admin | Role::AccountManager | Role::Developer)));

    Ok(())
}
