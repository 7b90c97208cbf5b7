use crate::{
    model::notification::NotificationKind,
    server::{
        data::notification::NotificationRepository, error::AppError,
        model::notification::CreateNotificationParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod get_paginated_for_user;
mod mark_read;
