use crate::server::{
    data::review::ReviewRepository,
    model::review::{CreateReviewParam, UpdateReviewParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_space_paginated;
mod update;
