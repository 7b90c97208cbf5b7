use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FileDto {
    pub id: i32,
    pub issue_id: i32,
    pub uploader_id: i32,
    pub uploader_name: String,
    pub name: String,
    pub url: String,
    pub size: i64,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

/// Metadata for a file already uploaded to external object storage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateFileDto {
    pub name: String,
    pub url: String,
    pub size: i64,
    pub content_type: String,
}
