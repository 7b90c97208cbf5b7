use super::*;

/// Tests paging through users ordered by name.
///
/// Expected: Ok with 2 users on the first page, 1 on the second, total 3
#[tokio::test]
async fn pages_users_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Carol", "Alice", "Bob"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let first = repo.get_all_paginated(None, 0, 2).await?;
    let second = repo.get_all_paginated(None, 1, 2).await?;

    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);
    let names: Vec<_> = first.items.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].name, "Carol");

    Ok(())
}

/// Tests the role filter.
///
/// Expected: Ok with only pending USER accounts
#[tokio::test]
async fn filters_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::create_user(db).await?;
    factory::create_user_with_role(db, "DEVELOPER").await?;

    let page = UserRepository::new(db)
        .get_all_paginated(Some(Role::User), 0, 10)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, pending.id);

    Ok(())
}
