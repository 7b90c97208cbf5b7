use crate::server::{
    data::client::ClientRepository,
    error::AppError,
    model::client::{ClientFieldsParam, ClientFilter, ClientScope},
};
use test_utils::{builder::TestBuilder, factory};

mod count_issues;
mod create;
mod delete;
mod get_paginated;
mod update;

fn fields(name: &str, account_manager_id: Option<i32>) -> ClientFieldsParam {
    ClientFieldsParam {
        name: name.to_string(),
        email: Some("ops@example.com".to_string()),
        phone: None,
        website: Some("https://example.com".to_string()),
        notes: None,
        account_manager_id,
    }
}
