//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories fill every
//! required column with unique values so tests only spell out what they assert on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let manager = factory::user::UserFactory::new(db).role("ACCOUNT_MANAGER").build().await?;
//! let client = factory::client::ClientFactory::new(db)
//!     .account_manager_id(Some(manager.id))
//!     .build()
//!     .await?;
//! let issue = factory::create_issue(db, client.id, manager.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `client` - Create client entities
//! - `issue` - Create issue entities
//! - `comment` - Create comment entities
//! - `file` - Create file attachment entities
//! - `notification` - Create notification entities
//! - `domain_name` - Create domain name entities
//! - `helpers` - Unique id generation and creating entities with dependencies

pub mod client;
pub mod comment;
pub mod domain_name;
pub mod file;
pub mod helpers;
pub mod issue;
pub mod notification;
pub mod user;

pub use client::create_client;
pub use comment::create_comment;
pub use domain_name::create_domain_name;
pub use file::create_file;
pub use issue::create_issue;
pub use notification::create_notification;
pub use user::{create_user, create_user_with_role};
