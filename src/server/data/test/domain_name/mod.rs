use crate::server::{
    data::domain_name::DomainNameRepository, error::AppError,
    model::domain_name::DomainNameFieldsParam,
};
use test_utils::{builder::TestBuilder, factory};

mod crud;
