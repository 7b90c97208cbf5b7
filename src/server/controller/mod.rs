//! HTTP handlers.
//!
//! Each handler checks permissions with `AuthGuard`, calls a service and converts the
//! domain result into a DTO. Handlers carry `#[utoipa::path]` annotations that
//! `router` collects into the OpenAPI document.

pub mod auth;
pub mod client;
pub mod comment;
pub mod domain_name;
pub mod file;
pub mod issue;
pub mod notification;
pub mod param;
pub mod user;
