use super::*;

/// Expected: Ok(Some) with the new role persisted
#[tokio::test]
async fn updates_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.update_role(user.id, Role::AccountManager).await?;

    assert_eq!(updated.map(|u| u.role), Some(Role::AccountManager));
    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.role, Role::AccountManager);

    Ok(())
}

/// Expected: Ok(None) for an unknown user
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).update_role(999, Role::Admin).await?;

    assert!(result.is_none());

    Ok(())
}
