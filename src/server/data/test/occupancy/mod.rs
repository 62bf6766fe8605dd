use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::occupancy::CrowdLevel,
    server::{
        data::occupancy::{OccupancyRepository, INITIAL_VERSION},
        model::occupancy::OccupancySnapshot,
    },
};

mod current;
mod get_readings_paginated;
mod insert_reading;

fn snapshot(count: i32, percentage: f64, crowd_level: CrowdLevel) -> OccupancySnapshot {
    OccupancySnapshot {
        count,
        percentage,
        crowd_level,
        recorded_at: Utc::now(),
    }
}
