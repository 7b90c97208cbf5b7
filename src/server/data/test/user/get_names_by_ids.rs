use super::*;

/// Expected: Ok with names for existing IDs and nothing for unknown ones
#[tokio::test]
async fn maps_existing_ids_to_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db).name("Alice").build().await?;
    let bob = factory::user::UserFactory::new(db).name("Bob").build().await?;

    let names = UserRepository::new(db)
        .get_names_by_ids(&[alice.id, bob.id, alice.id, 999])
        .await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&alice.id).map(String::as_str), Some("Alice"));
    assert_eq!(names.get(&bob.id).map(String::as_str), Some("Bob"));

    Ok(())
}

/// Expected: Ok with an empty map without querying
#[tokio::test]
async fn empty_input_returns_empty_map() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let names = UserRepository::new(db).get_names_by_ids(&[]).await?;

    assert!(names.is_empty());

    Ok(())
}
