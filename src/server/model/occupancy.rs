//! Occupancy domain models and the crowd level computation.
//!
//! The percentage and crowd level are pure functions of a reading and the
//! space capacity. They live here so the service only orchestrates the
//! reading log, the lock and the versioned upsert.

use chrono::{DateTime, Utc};

use crate::{
    model::occupancy::{
        CrowdLevel, CurrentOccupancyDto, OccupancyReadingDto, ReportOccupancyDto,
    },
    server::{
        error::{config::ConfigError, AppError},
        util::parse::parse_stored,
    },
};

/// Lower bounds, in percent, of the upper three crowd levels.
///
/// `EMPTY` is exactly 0 % and `LOW` covers everything between 0 % and
/// `moderate`. Every bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrowdLevelThresholds {
    pub moderate: f64,
    pub high: f64,
    pub full: f64,
}

impl Default for CrowdLevelThresholds {
    fn default() -> Self {
        Self {
            moderate: 33.0,
            high: 66.0,
            full: 100.0,
        }
    }
}

impl CrowdLevelThresholds {
    /// Creates thresholds, requiring `0 < moderate < high < full <= 100`.
    pub fn new(moderate: f64, high: f64, full: f64) -> Result<Self, ConfigError> {
        let ordered = moderate > 0.0 && moderate < high && high < full && full <= 100.0;
        if !ordered {
            return Err(ConfigError::InvalidThresholds(format!(
                "expected 0 < moderate < high < full <= 100, got moderate={} high={} full={}",
                moderate, high, full
            )));
        }

        Ok(Self {
            moderate,
            high,
            full,
        })
    }

    /// Maps a clamped percentage onto a crowd level.
    pub fn classify(&self, percentage: f64) -> CrowdLevel {
        if percentage <= 0.0 {
            CrowdLevel::Empty
        } else if percentage >= self.full {
            CrowdLevel::Full
        } else if percentage >= self.high {
            CrowdLevel::High
        } else if percentage >= self.moderate {
            CrowdLevel::Moderate
        } else {
            CrowdLevel::Low
        }
    }
}

/// Computes `count / capacity * 100`, clamped to `0..=100`.
///
/// # Returns
/// - `Some(percentage)` - Capacity is positive
/// - `None` - Capacity is zero or negative and no percentage exists
pub fn occupancy_percentage(count: i32, capacity: i32) -> Option<f64> {
    if capacity <= 0 {
        return None;
    }

    let percentage = f64::from(count) / f64::from(capacity) * 100.0;
    Some(percentage.clamp(0.0, 100.0))
}

/// Runtime settings for the occupancy service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancySettings {
    pub thresholds: CrowdLevelThresholds,
    /// Attempts at the versioned upsert before giving up with `Conflict`.
    pub max_retries: u32,
}

impl Default for OccupancySettings {
    fn default() -> Self {
        Self {
            thresholds: CrowdLevelThresholds::default(),
            max_retries: 5,
        }
    }
}

/// Derived values written to the current occupancy row in one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancySnapshot {
    pub count: i32,
    pub percentage: f64,
    pub crowd_level: CrowdLevel,
    pub recorded_at: DateTime<Utc>,
}

/// Latest occupancy of a space.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentOccupancy {
    pub space_id: i32,
    pub capacity: i32,
    /// Raw reported count. May exceed capacity.
    pub count: i32,
    pub percentage: f64,
    pub crowd_level: CrowdLevel,
    /// `None` until the first reading is accepted.
    pub updated_at: Option<DateTime<Utc>>,
}

impl CurrentOccupancy {
    /// Occupancy of a space that has never received a reading.
    pub fn empty(space_id: i32, capacity: i32) -> Self {
        Self {
            space_id,
            capacity,
            count: 0,
            percentage: 0.0,
            crowd_level: CrowdLevel::Empty,
            updated_at: None,
        }
    }

    /// Converts the stored row, joining in the capacity of its space.
    ///
    /// # Returns
    /// - `Ok(CurrentOccupancy)` - Converted domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored crowd level
    ///   is unknown
    pub fn from_entity(
        entity: entity::current_occupancy::Model,
        capacity: i32,
    ) -> Result<Self, AppError> {
        let crowd_level = parse_stored("crowd_level", entity.crowd_level, entity.space_id)?;

        Ok(Self {
            space_id: entity.space_id,
            capacity,
            count: entity.count,
            percentage: entity.percentage,
            crowd_level,
            updated_at: Some(entity.updated_at),
        })
    }

    pub fn into_dto(self) -> CurrentOccupancyDto {
        CurrentOccupancyDto {
            space_id: self.space_id,
            capacity: self.capacity,
            count: self.count,
            percentage: self.percentage,
            crowd_level: self.crowd_level,
            updated_at: self.updated_at,
        }
    }
}

/// One entry of the append-only reading log.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyReading {
    pub id: i32,
    pub space_id: i32,
    pub count: i32,
    pub source: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl OccupancyReading {
    pub fn from_entity(entity: entity::occupancy_reading::Model) -> Self {
        Self {
            id: entity.id,
            space_id: entity.space_id,
            count: entity.count,
            source: entity.source,
            recorded_at: entity.recorded_at,
        }
    }

    pub fn into_dto(self) -> OccupancyReadingDto {
        OccupancyReadingDto {
            id: self.id,
            space_id: self.space_id,
            count: self.count,
            source: self.source,
            recorded_at: self.recorded_at,
        }
    }
}

/// A reading reported for a space.
#[derive(Debug, Clone)]
pub struct ReportOccupancyParam {
    pub space_id: i32,
    pub count: i32,
    pub source: Option<String>,
}

impl ReportOccupancyParam {
    pub fn from_dto(space_id: i32, dto: ReportOccupancyDto) -> Self {
        Self {
            space_id,
            count: dto.count,
            source: dto.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_band_with_inclusive_lower_bounds() {
        let thresholds = CrowdLevelThresholds::default();
        let cases = [
            (0.0, CrowdLevel::Empty),
            (0.5, CrowdLevel::Low),
            (32.9, CrowdLevel::Low),
            (33.0, CrowdLevel::Moderate),
            (65.9, CrowdLevel::Moderate),
            (66.0, CrowdLevel::High),
            (99.9, CrowdLevel::High),
            (100.0, CrowdLevel::Full),
        ];

        for (percentage, expected) in cases {
            assert_eq!(
                thresholds.classify(percentage),
                expected,
                "percentage {}",
                percentage
            );
        }
    }

    #[test]
    fn custom_full_threshold_below_100() {
        let thresholds = CrowdLevelThresholds::new(25.0, 50.0, 90.0).unwrap();

        assert_eq!(thresholds.classify(90.0), CrowdLevel::Full);
        assert_eq!(thresholds.classify(89.0), CrowdLevel::High);
        assert_eq!(thresholds.classify(25.0), CrowdLevel::Moderate);
    }

    #[test]
    fn rejects_unordered_or_out_of_range_thresholds() {
        assert!(CrowdLevelThresholds::new(0.0, 50.0, 100.0).is_err());
        assert!(CrowdLevelThresholds::new(50.0, 50.0, 100.0).is_err());
        assert!(CrowdLevelThresholds::new(30.0, 60.0, 101.0).is_err());
        assert!(CrowdLevelThresholds::new(70.0, 60.0, 100.0).is_err());
        assert!(CrowdLevelThresholds::new(f64::NAN, 60.0, 100.0).is_err());
    }

    #[test]
    fn percentage_is_clamped_to_100() {
        assert_eq!(occupancy_percentage(150, 100), Some(100.0));
        assert_eq!(occupancy_percentage(50, 200), Some(25.0));
        assert_eq!(occupancy_percentage(0, 10), Some(0.0));
    }

    #[test]
    fn percentage_is_undefined_without_capacity() {
        assert_eq!(occupancy_percentage(5, 0), None);
        assert_eq!(occupancy_percentage(5, -1), None);
    }

    #[test]
    fn empty_occupancy_has_no_timestamp() {
        let occupancy = CurrentOccupancy::empty(3, 40);

        assert_eq!(occupancy.count, 0);
        assert_eq!(occupancy.crowd_level, CrowdLevel::Empty);
        assert!(occupancy.updated_at.is_none());
    }
}
