use crate::server::{data::comment::CommentRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_issue;
mod update_and_delete;
