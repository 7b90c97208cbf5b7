use chrono::{Duration, Utc};

use crate::{
    model::issue::{IssuePriority, IssueStatus},
    server::{
        data::issue::IssueRepository,
        error::AppError,
        model::issue::{CreateIssueParam, IssueFilter, IssueScope, UpdateIssueParam},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_due_unnotified;
mod get_paginated;
mod update;
mod update_status_and_assignee;
