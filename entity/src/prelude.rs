pub use super::client::Entity as Client;
pub use super::comment::Entity as Comment;
pub use super::domain_name::Entity as DomainName;
pub use super::file::Entity as File;
pub use super::issue::Entity as Issue;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
