use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub issue_id: i32,
    pub author_id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            issue_id: entity.issue_id,
            author_id: entity.author_id,
            body: entity.body,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_name: String,
}

impl CommentWithAuthor {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            issue_id: self.comment.issue_id,
            author_id: self.comment.author_id,
            author_name: self.author_name,
            body: self.comment.body,
            created_at: self.comment.created_at,
            updated_at: self.comment.updated_at,
        }
    }
}
