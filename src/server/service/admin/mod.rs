//! First-admin bootstrap.

pub mod code;
