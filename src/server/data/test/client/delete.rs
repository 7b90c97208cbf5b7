use super::*;

/// Expected: Ok(true) then the client is gone; Ok(false) the second time
#[tokio::test]
async fn deletes_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ClientRepository::new(db);
    let client = repo.create(fields("Acme", None)).await?;

    assert!(repo.delete(client.id).await?);
    assert!(repo.find_by_id(client.id).await?.is_none());
    assert!(!repo.delete(client.id).await?);

    Ok(())
}
