use super::*;

/// Tests that marking is scoped to the owner.
///
/// Expected: Ok(false) for another user's notification, Ok(true) for the owner
#[tokio::test]
async fn marks_only_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    assert!(!repo.mark_read(notification.id, intruder.id).await?);
    assert_eq!(repo.count_unread(owner.id).await?, 1);

    assert!(repo.mark_read(notification.id, owner.id).await?);
    assert_eq!(repo.count_unread(owner.id).await?, 0);

    Ok(())
}

/// Expected: Ok(2) for the owner's unread notifications only
#[tokio::test]
async fn marks_all_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert_eq!(repo.count_unread(user.id).await?, 0);
    assert_eq!(repo.count_unread(other.id).await?, 1);

    Ok(())
}

/// Expected: Ok(false) for another user's notification, Ok(true) for the owner
#[tokio::test]
async fn deletes_only_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    assert!(!repo.delete(notification.id, intruder.id).await?);
    assert!(repo.delete(notification.id, owner.id).await?);
    assert_eq!(repo.count_unread(owner.id).await?, 0);

    Ok(())
}
