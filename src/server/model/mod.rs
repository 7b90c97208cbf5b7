//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the inputs
//! of service and repository operations.

pub mod client;
pub mod comment;
pub mod domain_name;
pub mod file;
pub mod issue;
pub mod notification;
pub mod page;
pub mod user;
