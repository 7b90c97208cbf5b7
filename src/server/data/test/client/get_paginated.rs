use super::*;

/// Expected: Ok with every client ordered by name
#[tokio::test]
async fn all_scope_returns_every_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ClientRepository::new(db);

    for name in ["Zenith", "Acme", "Globex"] {
        repo.create(fields(name, None)).await?;
    }

    let page = repo
        .get_paginated(ClientScope::All, ClientFilter::default(), 0, 10)
        .await?;

    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Acme", "Globex", "Zenith"]);
    assert_eq!(page.total, 3);

    Ok(())
}

/// Expected: Ok with only the scoped client, and nothing for the empty scope
#[tokio::test]
async fn restricted_scopes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ClientRepository::new(db);

    let acme = repo.create(fields("Acme", None)).await?;
    repo.create(fields("Globex", None)).await?;

    let only = repo
        .get_paginated(ClientScope::Only(acme.id), ClientFilter::default(), 0, 10)
        .await?;
    assert_eq!(only.total, 1);
    assert_eq!(only.items[0].id, acme.id);

    let nothing = repo
        .get_paginated(ClientScope::Nothing, ClientFilter::default(), 0, 10)
        .await?;
    assert_eq!(nothing.total, 0);
    assert!(nothing.items.is_empty());

    Ok(())
}

/// Expected: Ok with clients matching the search and manager filters
#[tokio::test]
async fn applies_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let manager = factory::create_user_with_role(db, "ACCOUNT_MANAGER").await?;
    let repo = ClientRepository::new(db);

    repo.create(fields("Acme Corp", Some(manager.id))).await?;
    repo.create(fields("Acme Labs", None)).await?;
    repo.create(fields("Globex", Some(manager.id))).await?;

    let searched = repo
        .get_paginated(
            ClientScope::All,
            ClientFilter {
                search: Some("Acme".to_string()),
                account_manager_id: None,
            },
            0,
            10,
        )
        .await?;
    assert_eq!(searched.total, 2);

    let managed = repo
        .get_paginated(
            ClientScope::All,
            ClientFilter {
                search: Some("Acme".to_string()),
                account_manager_id: Some(manager.id),
            },
            0,
            10,
        )
        .await?;
    assert_eq!(managed.total, 1);
    assert_eq!(managed.items[0].name, "Acme Corp");

    Ok(())
}
