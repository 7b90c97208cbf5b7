use chrono::{DateTime, Utc};

use crate::{
    model::notification::{NotificationDto, NotificationKind, PaginatedNotificationsDto},
    server::{error::AppError, model::page::Page, util::parse::parse_notification_kind},
};

/// In-app notification addressed to a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub issue_id: Option<i32>,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            issue_id: self.issue_id,
            kind: self.kind,
            message: self.message,
            read: self.read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            issue_id: entity.issue_id,
            kind: parse_notification_kind(&entity.kind)?,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        })
    }
}

impl Page<Notification> {
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        let page = self.map(Notification::into_dto);

        PaginatedNotificationsDto {
            notifications: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: i32,
    pub issue_id: Option<i32>,
    pub kind: NotificationKind,
    pub message: String,
}
