use super::*;
use chrono::{Duration, Utc};

/// Expected: Ok with the user's notifications newest first
#[tokio::test]
async fn returns_own_notifications_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_issue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let older = factory::notification::NotificationFactory::new(db, user.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::notification::NotificationFactory::new(db, user.id)
        .created_at(now)
        .read(true)
        .build()
        .await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let page = repo.get_paginated_for_user(user.id, false, 0, 10).await?;

    let ids: Vec<_> = page.items.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let unread = repo.get_paginated_for_user(user.id, true, 0, 10).await?;
    assert_eq!(unread.total, 1);
    assert_eq!(unread.items[0].id, older.id);

    Ok(())
}
