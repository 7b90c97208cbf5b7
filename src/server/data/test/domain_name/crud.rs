use super::*;

fn fields(name: &str) -> DomainNameFieldsParam {
    DomainNameFieldsParam {
        name: name.to_string(),
        registrar: Some("Namecheap".to_string()),
        expires_at: None,
    }
}

/// Expected: Ok with the domain listed under its client and findable by name
#[tokio::test]
async fn creates_and_finds_domain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let other = factory::create_client(db, None).await?;
    factory::create_domain_name(db, other.id).await?;

    let repo = DomainNameRepository::new(db);
    let domain = repo.create(client.id, fields("acme.com")).await?;

    let listed = repo.get_by_client(client.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, domain.id);
    assert_eq!(repo.find_by_name("acme.com").await?.map(|d| d.client_id), Some(client.id));

    Ok(())
}

/// Expected: Err(Conflict) inserting the same name for another client
#[tokio::test]
async fn name_is_unique_across_clients() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let a = factory::create_client(db, None).await?;
    let b = factory::create_client(db, None).await?;

    let repo = DomainNameRepository::new(db);
    repo.create(a.id, fields("acme.com")).await?;

    assert!(matches!(
        repo.create(b.id, fields("acme.com")).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Expected: Err(Conflict) renaming onto a registered name, the domain unchanged
#[tokio::test]
async fn rename_onto_taken_name_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;

    let repo = DomainNameRepository::new(db);
    repo.create(client.id, fields("acme.com")).await?;
    let other = repo.create(client.id, fields("acme.io")).await?;

    let result = repo.update(other.id, fields("acme.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.find_by_id(other.id).await?.map(|d| d.name), Some("acme.io".to_string()));

    Ok(())
}

/// Expected: Ok with updated fields, then deleted
#[tokio::test]
async fn updates_and_deletes_domain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let domain = factory::create_domain_name(db, client.id).await?;

    let repo = DomainNameRepository::new(db);
    let updated = repo
        .update(domain.id, fields("acme.io"))
        .await?
        .unwrap();
    assert_eq!(updated.name, "acme.io");
    assert_eq!(updated.registrar.as_deref(), Some("Namecheap"));

    assert!(repo.delete(domain.id).await?);
    assert!(repo.find_by_id(domain.id).await?.is_none());

    Ok(())
}
