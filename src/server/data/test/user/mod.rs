use crate::{
    model::user::Role,
    server::{data::user::UserRepository, error::AppError, model::user::CreateUserParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_credentials_by_email;
mod get_all_paginated;
mod set_role;
mod update_profile;

fn create_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        name: "Alice".to_string(),
        role: Role::User,
    }
}
