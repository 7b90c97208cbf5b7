//! Request authentication and authorization.
//!
//! - `session` - Typed access to the values stored in the session
//! - `policy` - Pure role rules over users and resources
//! - `auth` - `AuthGuard` checking route permissions against the session user
//! - `gate` - Middleware rejecting anonymous and unapproved users on data routes

pub mod auth;
pub mod gate;
pub mod policy;
pub mod session;

#[cfg(test)]
mod test;
