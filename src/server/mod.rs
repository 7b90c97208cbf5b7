//! Issue tracker backend.
//!
//! Serves the JSON API for clients, issues, comments, attachments, notifications and
//! domain names. Axum handles routing, SeaORM talks to SQLite, tower-sessions keeps
//! logins and utoipa documents every endpoint.
//!
//! # Layers
//!
//! - `controller/` - handlers: permission check, service call, DTO conversion
//! - `service/` - validation, workflow rules and notification fan-out
//! - `data/` - repositories turning entities into domain models
//! - `model/` - domain models, pages and operation params
//! - `middleware/` - role rules, `AuthGuard`, session accessors and the approval gate
//! - `error/` - `AppError` and its HTTP mapping
//!
//! `config`, `state`, `startup` and `router` wire these together at boot, and
//! `scheduler/` runs the due-date reminder job.
//!
//! # Request flow
//!
//! A request passes the session layer and, for data routes, the approval gate. The
//! handler asks `AuthGuard` for the permissions it needs, calls a service, and the
//! service works through one or more repositories. Results travel back as domain
//! models and leave the handler as DTOs.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
