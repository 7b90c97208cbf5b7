use super::*;

/// Expected: Ok(false) when only non-admin users exist
#[tokio::test]
async fn returns_false_without_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user_with_role(db, "ACCOUNT_MANAGER").await?;

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Expected: Ok(true) once an ADMIN user exists
#[tokio::test]
async fn returns_true_with_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_role(db, "ADMIN").await?;

    assert!(UserRepository::new(db).admin_exists().await?);

    Ok(())
}
