use crate::server::{data::file::FileRepository, error::AppError, model::file::CreateFileParam};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_issue;
