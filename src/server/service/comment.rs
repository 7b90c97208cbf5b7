//! Issue comments.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, issue::IssueRepository, user::UserRepository},
    error::AppError,
    model::{
        comment::{Comment, CommentWithAuthor},
        user::User,
    },
    service::notification::NotificationService,
    util::validate,
};

const BODY_MAX: usize = 5_000;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an issue's comments, oldest first.
    pub async fn get_by_issue(&self, issue_id: i32) -> Result<Vec<CommentWithAuthor>, AppError> {
        let comments = CommentRepository::new(self.db).get_by_issue(issue_id).await?;

        let author_ids: Vec<i32> = comments.iter().map(|c| c.author_id).collect();
        let names = UserRepository::new(self.db)
            .get_names_by_ids(&author_ids)
            .await?;

        Ok(comments
            .into_iter()
            .map(|comment| CommentWithAuthor {
                author_name: names.get(&comment.author_id).cloned().unwrap_or_default(),
                comment,
            })
            .collect())
    }

    /// Adds a comment and notifies the issue's reporter and assignee.
    pub async fn create(
        &self,
        author: &User,
        issue_id: i32,
        body: String,
    ) -> Result<CommentWithAuthor, AppError> {
        let body = validate::text("body", &body, 1, BODY_MAX)?;

        let Some(issue) = IssueRepository::new(self.db).find_by_id(issue_id).await? else {
            return Err(AppError::NotFound(format!("Issue {} not found", issue_id)));
        };

        let comment = CommentRepository::new(self.db)
            .create(issue_id, author.id, body)
            .await?;

        NotificationService::new(self.db)
            .notify_comment_added(&issue, author)
            .await?;

        Ok(Self::with_author(comment, author))
    }

    /// Replaces a comment's body.
    pub async fn update(&self, author: &User, id: i32, body: String) -> Result<CommentWithAuthor, AppError> {
        let body = validate::text("body", &body, 1, BODY_MAX)?;

        let comment = CommentRepository::new(self.db)
            .update(id, body)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(Self::with_author(comment, author))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    fn with_author(comment: Comment, author: &User) -> CommentWithAuthor {
        CommentWithAuthor {
            comment,
            author_name: author.name.clone(),
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Comment {} not found", id))
}
