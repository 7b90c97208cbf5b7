//! SeaORM entity definitions for every table created by the `migration` crate.

pub mod prelude;

pub mod client;
pub mod comment;
pub mod domain_name;
pub mod file;
pub mod issue;
pub mod notification;
pub mod user;
