//! API data transfer objects.
//!
//! Request and response bodies exchanged over the JSON API, together with the enums
//! that make up the API vocabulary (roles, issue statuses and priorities,
//! notification kinds). Every type derives `ToSchema` so it appears in the OpenAPI
//! document.

pub mod api;
pub mod client;
pub mod comment;
pub mod domain_name;
pub mod file;
pub mod issue;
pub mod notification;
pub mod user;
