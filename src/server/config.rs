use std::net::SocketAddr;

use axum::http::HeaderValue;
use chrono::Duration;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::occupancy::{CrowdLevelThresholds, OccupancySettings},
};

/// Minimum accepted length of `JWT_SECRET` in bytes.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 14;
const DEFAULT_OCCUPANCY_MAX_RETRIES: u32 = 5;

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    pub jwt_secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,

    pub occupancy: OccupancySettings,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<HeaderValue>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value valid
    /// - `Err(ConfigError)` - The first missing or invalid variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;

        let jwt_secret = required(&lookup, "JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::WeakJwtSecret {
                min: MIN_JWT_SECRET_LENGTH,
                actual: jwt_secret.len(),
            });
        }

        let bind_address = parsed(&lookup, "BIND_ADDRESS")?
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

        let access_minutes = positive(&lookup, "ACCESS_TOKEN_TTL_MINUTES")?
            .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_MINUTES);
        let refresh_days = positive(&lookup, "REFRESH_TOKEN_TTL_DAYS")?
            .unwrap_or(DEFAULT_REFRESH_TOKEN_TTL_DAYS);

        let access_token_ttl = Duration::try_minutes(access_minutes)
            .ok_or_else(|| out_of_range("ACCESS_TOKEN_TTL_MINUTES", access_minutes))?;
        let refresh_token_ttl = Duration::try_days(refresh_days)
            .ok_or_else(|| out_of_range("REFRESH_TOKEN_TTL_DAYS", refresh_days))?;

        let defaults = CrowdLevelThresholds::default();
        let thresholds = CrowdLevelThresholds::new(
            parsed(&lookup, "CROWD_LEVEL_MODERATE_PERCENT")?.unwrap_or(defaults.moderate),
            parsed(&lookup, "CROWD_LEVEL_HIGH_PERCENT")?.unwrap_or(defaults.high),
            parsed(&lookup, "CROWD_LEVEL_FULL_PERCENT")?.unwrap_or(defaults.full),
        )?;

        let max_retries = parsed::<u32, _>(&lookup, "OCCUPANCY_MAX_RETRIES")?
            .unwrap_or(DEFAULT_OCCUPANCY_MAX_RETRIES);
        if max_retries == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "OCCUPANCY_MAX_RETRIES".to_string(),
                value: "0".to_string(),
                reason: "must allow at least one attempt".to_string(),
            });
        }

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            database_url,
            bind_address,
            jwt_secret,
            access_token_ttl,
            refresh_token_ttl,
            occupancy: OccupancySettings {
                thresholds,
                max_retries,
            },
            cors_allowed_origins,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
}

fn positive<F>(lookup: &F, name: &str) -> Result<Option<i64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parsed::<i64, _>(lookup, name)? {
        Some(value) if value <= 0 => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        other => Ok(other),
    }
}

fn out_of_range(name: &str, value: i64) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: "out of range".to_string(),
    }
}

/// Parses a comma separated origin list. `*` or an empty list allows any origin.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
