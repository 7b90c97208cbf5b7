use super::*;

fn param(provider_id: &str, name: &str, role: Option<Role>) -> UpsertUserParam {
    UpsertUserParam {
        provider_id: provider_id.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        name: name.to_string(),
        role,
    }
}

/// Tests creating a new user on first login.
///
/// Expected: Ok with the USER role and no client link
#[tokio::test]
async fn creates_new_user_with_user_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .upsert(param("sub-1", "Alice", None))
        .await?;

    assert_eq!(user.provider_id, "sub-1");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.client_id, None);

    Ok(())
}

/// Tests that a repeat login refreshes profile fields without touching the role.
///
/// Expected: Ok with the same ID, new name, and the previously granted role
#[tokio::test]
async fn refreshes_profile_and_preserves_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    let first = repo.upsert(param("sub-1", "Alice", None)).await?;
    repo.update_role(first.id, Role::Developer).await?;

    let second = repo.upsert(param("sub-1", "Alice Smith", None)).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.name, "Alice Smith");
    assert_eq!(second.role, Role::Developer);

    Ok(())
}

/// Tests that an explicit role overrides the stored one.
///
/// Expected: Ok with the ADMIN role
#[tokio::test]
async fn applies_explicit_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    repo.upsert(param("sub-1", "Alice", None)).await?;
    let admin = repo.upsert(param("sub-1", "Alice", Some(Role::Admin))).await?;

    assert_eq!(admin.role, Role::Admin);

    Ok(())
}
