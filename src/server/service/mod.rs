//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input,
//! apply the rules that depend on request data, enrich domain models with display
//! names and trigger notifications. Route-level permissions are checked before a
//! service is called, by `AuthGuard` in the controller.

pub mod admin;
pub mod auth;
pub mod client;
pub mod comment;
pub mod domain_name;
pub mod file;
pub mod issue;
pub mod notification;
pub mod user;

#[cfg(test)]
mod test;
