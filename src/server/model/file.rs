use chrono::{DateTime, Utc};

use crate::model::file::{CreateFileDto, FileDto};

/// Metadata of a file attached to an issue.
///
/// The file content lives in external storage at `url`.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub id: i32,
    pub issue_id: i32,
    pub uploader_id: i32,
    pub name: String,
    pub url: String,
    pub size: i64,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

impl File {
    pub fn from_entity(entity: entity::file::Model) -> Self {
        Self {
            id: entity.id,
            issue_id: entity.issue_id,
            uploader_id: entity.uploader_id,
            name: entity.name,
            url: entity.url,
            size: entity.size,
            content_type: entity.content_type,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileWithUploader {
    pub file: File,
    pub uploader_name: String,
}

impl FileWithUploader {
    pub fn into_dto(self) -> FileDto {
        FileDto {
            id: self.file.id,
            issue_id: self.file.issue_id,
            uploader_id: self.file.uploader_id,
            uploader_name: self.uploader_name,
            name: self.file.name,
            url: self.file.url,
            size: self.file.size,
            content_type: self.file.content_type,
            created_at: self.file.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFileParam {
    pub issue_id: i32,
    pub uploader_id: i32,
    pub name: String,
    pub url: String,
    pub size: i64,
    pub content_type: String,
}

impl CreateFileParam {
    pub fn from_dto(dto: CreateFileDto, issue_id: i32, uploader_id: i32) -> Self {
        Self {
            issue_id,
            uploader_id,
            name: dto.name,
            url: dto.url,
            size: dto.size,
            content_type: dto.content_type,
        }
    }
}
