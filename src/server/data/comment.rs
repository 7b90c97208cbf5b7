//! Comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{error::AppError, model::comment::Comment};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        issue_id: i32,
        author_id: i32,
        body: String,
    ) -> Result<Comment, AppError> {
        let now = Utc::now();
        let entity = entity::comment::ActiveModel {
            issue_id: ActiveValue::Set(issue_id),
            author_id: ActiveValue::Set(author_id),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, AppError> {
        let entity = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Gets all comments on an issue, oldest first.
    pub async fn get_by_issue(&self, issue_id: i32) -> Result<Vec<Comment>, AppError> {
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::IssueId.eq(issue_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(comments.into_iter().map(Comment::from_entity).collect())
    }

    /// Replaces a comment's body and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The updated comment
    /// - `Ok(None)` - No comment with that ID
    pub async fn update(&self, id: i32, body: String) -> Result<Option<Comment>, AppError> {
        let Some(comment) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::comment::ActiveModel = comment.into();
        active_model.body = ActiveValue::Set(body);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        Ok(Some(Comment::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
