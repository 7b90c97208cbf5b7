use super::*;

/// Expected: Ok(Some) with replaced fields and a newer updated_at
#[tokio::test]
async fn replaces_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ClientRepository::new(db);
    let client = repo.create(fields("Acme", None)).await?;

    let mut param = fields("Acme Inc", None);
    param.email = None;
    param.notes = Some("Prefers email".to_string());

    let updated = repo.update(client.id, param).await?.unwrap();

    assert_eq!(updated.name, "Acme Inc");
    assert_eq!(updated.email, None);
    assert_eq!(updated.notes.as_deref(), Some("Prefers email"));
    assert!(updated.updated_at >= client.updated_at);

    Ok(())
}

/// Expected: Ok(None) for an unknown client
#[tokio::test]
async fn returns_none_for_missing_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClientRepository::new(db)
        .update(42, fields("Nobody", None))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Expected: Err(Conflict) renaming onto another client's name
#[tokio::test]
async fn rename_onto_taken_name_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ClientRepository::new(db);
    repo.create(fields("Acme", None)).await?;
    let globex = repo.create(fields("Globex", None)).await?;

    let result = repo.update(globex.id, fields("Acme", None)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(
        repo.find_by_id(globex.id).await?.map(|c| c.name),
        Some("Globex".to_string())
    );

    Ok(())
}
