//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed connection and performs the CRUD operations for
//! one table. Repositories whose writes are combined by a service are generic over
//! `ConnectionTrait`, so they run on a `DatabaseTransaction` as well. Repositories use SeaORM entity models internally and
//! return domain models from `server::model`, converting at this boundary.

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

pub mod client;
pub mod comment;
pub mod domain_name;
pub mod file;
pub mod issue;
pub mod notification;
pub mod user;

/// Maps a unique index violation to `AppError::Conflict` and passes other errors on.
///
/// Services check for duplicates before writing, but a concurrent request can still
/// win the race between that check and the write.
pub(crate) fn conflict_on_unique(err: DbErr, message: impl FnOnce() -> String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message()),
        _ => AppError::DbErr(err),
    }
}

#[cfg(test)]
mod test;
