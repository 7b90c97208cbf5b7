//! File attachment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::file::{CreateFileParam, File},
};

pub struct FileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateFileParam) -> Result<File, AppError> {
        let entity = entity::file::ActiveModel {
            issue_id: ActiveValue::Set(param.issue_id),
            uploader_id: ActiveValue::Set(param.uploader_id),
            name: ActiveValue::Set(param.name),
            url: ActiveValue::Set(param.url),
            size: ActiveValue::Set(param.size),
            content_type: ActiveValue::Set(param.content_type),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(File::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<File>, AppError> {
        let entity = entity::prelude::File::find_by_id(id).one(self.db).await?;

        Ok(entity.map(File::from_entity))
    }

    /// Gets all files attached to an issue, newest first.
    pub async fn get_by_issue(&self, issue_id: i32) -> Result<Vec<File>, AppError> {
        let files = entity::prelude::File::find()
            .filter(entity::file::Column::IssueId.eq(issue_id))
            .order_by_desc(entity::file::Column::CreatedAt)
            .order_by_desc(entity::file::Column::Id)
            .all(self.db)
            .await?;

        Ok(files.into_iter().map(File::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::File::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
