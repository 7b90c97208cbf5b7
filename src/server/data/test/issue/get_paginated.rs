use super::*;

/// Builds a fixture with issues visible through each scope.
///
/// Returns `(manager_id, developer_id, client_user_id, client_id, other_reporter_id)`.
async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(i32, i32, i32, i32, i32), AppError> {
    let (manager, client, client_user, _) =
        factory::helpers::create_issue_with_dependencies(db).await?;
    let developer = factory::create_user_with_role(db, "DEVELOPER").await?;
    let outsider = factory::create_user(db).await?;
    let other_client = factory::create_client(db, None).await?;

    // assigned to the developer, on the managed client
    factory::issue::IssueFactory::new(db, client.id, client_user.id)
        .assignee_id(Some(developer.id))
        .build()
        .await?;
    // on another client, reported by the outsider
    factory::create_issue(db, other_client.id, outsider.id).await?;

    Ok((manager.id, developer.id, client_user.id, client.id, outsider.id))
}

async fn total(
    db: &sea_orm::DatabaseConnection,
    scope: IssueScope,
) -> Result<u64, AppError> {
    let page = IssueRepository::new(db)
        .get_paginated(scope, IssueFilter::default(), 0, 50)
        .await?;
    Ok(page.total)
}

/// Expected: Ok with the counts each scope allows
#[tokio::test]
async fn applies_visibility_scopes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (manager, developer, client_user, client_id, outsider) = seed(db).await?;

    assert_eq!(total(db, IssueScope::All).await?, 3);
    assert_eq!(total(db, IssueScope::ManagedBy(manager)).await?, 2);
    assert_eq!(total(db, IssueScope::AssignedOrReported(developer)).await?, 1);
    assert_eq!(
        total(
            db,
            IssueScope::ClientOrReported {
                client_id,
                user_id: client_user
            }
        )
        .await?,
        2
    );
    assert_eq!(total(db, IssueScope::ReportedBy(outsider)).await?, 1);
    assert_eq!(total(db, IssueScope::Nothing).await?, 0);

    Ok(())
}

/// Tests that account managers also see issues they reported on other clients.
///
/// Expected: Ok with the managed client's issues plus the self-reported one
#[tokio::test]
async fn managed_scope_includes_own_reports() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (manager, _, _, _, _) = seed(db).await?;
    let unmanaged = factory::create_client(db, None).await?;
    factory::create_issue(db, unmanaged.id, manager).await?;

    assert_eq!(total(db, IssueScope::ManagedBy(manager)).await?, 3);

    Ok(())
}

/// Expected: Ok with only issues matching every filter
#[tokio::test]
async fn applies_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let client = factory::create_client(db, None).await?;
    let reporter = factory::create_user_with_role(db, "CLIENT").await?;
    let developer = factory::create_user_with_role(db, "DEVELOPER").await?;

    let target = factory::issue::IssueFactory::new(db, client.id, reporter.id)
        .status("IN_PROGRESS")
        .priority("URGENT")
        .assignee_id(Some(developer.id))
        .build()
        .await?;
    factory::issue::IssueFactory::new(db, client.id, reporter.id)
        .status("IN_PROGRESS")
        .priority("LOW")
        .build()
        .await?;
    factory::create_issue(db, client.id, reporter.id).await?;

    let page = IssueRepository::new(db)
        .get_paginated(
            IssueScope::All,
            IssueFilter {
                client_id: Some(client.id),
                status: Some(IssueStatus::InProgress),
                priority: Some(IssuePriority::Urgent),
                assignee_id: Some(developer.id),
            },
            0,
            10,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, target.id);

    Ok(())
}
