use super::*;

/// Tests linking and unlinking a CLIENT user.
///
/// Expected: Ok with client_id set, then cleared
#[tokio::test]
async fn links_and_unlinks_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let user = factory::create_user_with_role(db, "CLIENT").await?;

    let repo = UserRepository::new(db);
    let linked = repo.update_client(user.id, Some(client.id)).await?.unwrap();
    assert_eq!(linked.client_id, Some(client.id));

    let unlinked = repo.update_client(user.id, None).await?.unwrap();
    assert_eq!(unlinked.client_id, None);

    Ok(())
}

/// Tests clearing every link to a client.
///
/// Expected: Ok(2) and both users unlinked, the unrelated user untouched
#[tokio::test]
async fn unlink_client_clears_all_links() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let other = factory::create_client(db, None).await?;

    let a = factory::user::UserFactory::new(db)
        .role("CLIENT")
        .client_id(Some(client.id))
        .build()
        .await?;
    let b = factory::user::UserFactory::new(db)
        .role("CLIENT")
        .client_id(Some(client.id))
        .build()
        .await?;
    let c = factory::user::UserFactory::new(db)
        .role("CLIENT")
        .client_id(Some(other.id))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.unlink_client(client.id).await?, 2);

    assert_eq!(repo.find_by_id(a.id).await?.unwrap().client_id, None);
    assert_eq!(repo.find_by_id(b.id).await?.unwrap().client_id, None);
    assert_eq!(repo.find_by_id(c.id).await?.unwrap().client_id, Some(other.id));

    Ok(())
}
