use crate::{
    model::user::Role,
    server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam},
};
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod get_all_paginated;
mod get_names_by_ids;
mod get_staff;
mod update_client;
mod update_role;
mod upsert;
