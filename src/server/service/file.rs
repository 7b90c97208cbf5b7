//! File attachment metadata.
//!
//! Uploads go straight to external object storage; this service only records the
//! resulting URL with the file's name, size and content type.

use sea_orm::DatabaseConnection;

use crate::{
    model::file::CreateFileDto,
    server::{
        data::{file::FileRepository, user::UserRepository},
        error::AppError,
        model::{
            file::{CreateFileParam, FileWithUploader},
            user::User,
        },
        util::validate::{self, MAX_FILE_SIZE},
    },
};

pub struct FileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an issue's attachments, newest first.
    pub async fn get_by_issue(&self, issue_id: i32) -> Result<Vec<FileWithUploader>, AppError> {
        let files = FileRepository::new(self.db).get_by_issue(issue_id).await?;

        let uploader_ids: Vec<i32> = files.iter().map(|f| f.uploader_id).collect();
        let names = UserRepository::new(self.db)
            .get_names_by_ids(&uploader_ids)
            .await?;

        Ok(files
            .into_iter()
            .map(|file| FileWithUploader {
                uploader_name: names.get(&file.uploader_id).cloned().unwrap_or_default(),
                file,
            })
            .collect())
    }

    /// Records an attachment on an issue.
    ///
    /// # Returns
    /// - `Ok(FileWithUploader)` - The recorded file
    /// - `Err(AppError::BadRequest)` - Invalid name, URL, size or content type
    pub async fn create(
        &self,
        uploader: &User,
        issue_id: i32,
        dto: CreateFileDto,
    ) -> Result<FileWithUploader, AppError> {
        let mut param = CreateFileParam::from_dto(dto, issue_id, uploader.id);

        param.name = validate::text("name", &param.name, 1, 255)?;
        param.url = validate::http_url("url", &param.url)?;
        param.content_type = validate::text("content_type", &param.content_type, 1, 255)?;
        if param.size < 1 || param.size > MAX_FILE_SIZE {
            return Err(AppError::BadRequest(format!(
                "size must be between 1 and {} bytes",
                MAX_FILE_SIZE
            )));
        }

        let file = FileRepository::new(self.db).create(param).await?;

        Ok(FileWithUploader {
            file,
            uploader_name: uploader.name.clone(),
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FileRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("File {} not found", id)));
        }

        Ok(())
    }
}
