use crate::server::{
    data::space::SpaceRepository,
    model::space::{CreateSpaceParam, UpdateSpaceParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_paginated;
mod update;
