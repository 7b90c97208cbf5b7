use super::*;

/// Expected: Ok with all fields persisted and timestamps set
#[tokio::test]
async fn creates_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let manager = factory::create_user_with_role(db, "ACCOUNT_MANAGER").await?;

    let client = ClientRepository::new(db)
        .create(fields("Acme", Some(manager.id)))
        .await?;

    assert_eq!(client.name, "Acme");
    assert_eq!(client.account_manager_id, Some(manager.id));
    assert_eq!(client.website.as_deref(), Some("https://example.com"));
    assert_eq!(client.created_at, client.updated_at);

    Ok(())
}

/// Tests the unique constraint on client names when no pre-check ran, as when two
/// requests race.
///
/// Expected: Err(Conflict) on the second insert, the first client untouched
#[tokio::test]
async fn rejects_duplicate_name_as_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ClientRepository::new(db);

    let first = repo.create(fields("Acme", None)).await?;
    let result = repo.create(fields("Acme", None)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.find_by_name("Acme").await?.map(|c| c.id), Some(first.id));

    Ok(())
}
