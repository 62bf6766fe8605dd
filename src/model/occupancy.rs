use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discrete crowd classification derived from the occupancy percentage.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrowdLevel {
    Empty,
    Low,
    Moderate,
    High,
    Full,
}

impl CrowdLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Empty => "EMPTY",
            CrowdLevel::Low => "LOW",
            CrowdLevel::Moderate => "MODERATE",
            CrowdLevel::High => "HIGH",
            CrowdLevel::Full => "FULL",
        }
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrowdLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "EMPTY" => Ok(CrowdLevel::Empty),
            "LOW" => Ok(CrowdLevel::Low),
            "MODERATE" => Ok(CrowdLevel::Moderate),
            "HIGH" => Ok(CrowdLevel::High),
            "FULL" => Ok(CrowdLevel::Full),
            other => Err(format!("Unknown crowd level '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ReportOccupancyDto {
    pub count: i32,
    /// Free-form tag for where the reading came from (sensor id, "manual", ...).
    pub source: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CurrentOccupancyDto {
    pub space_id: i32,
    pub capacity: i32,
    /// Raw reported count; may exceed capacity.
    pub count: i32,
    /// Occupancy percentage clamped to 0..=100.
    pub percentage: f64,
    pub crowd_level: CrowdLevel,
    /// `None` when no reading has been accepted for the space yet.
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct OccupancyReadingDto {
    pub id: i32,
    pub space_id: i32,
    pub count: i32,
    pub source: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
