mod client;
mod comment;
mod domain_name;
mod file;
mod issue;
mod notification;
mod user;
