//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler
//! through Axum's state extraction. It holds the only process-wide state the
//! server has:
//! - Database connection pool
//! - JWT signing keys, immutable after startup
//! - Occupancy settings and the per-space lock table

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    model::occupancy::OccupancySettings,
    service::{auth::token::TokenService, occupancy::lock::SpaceLocks},
};

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: the connection is a pool handle, the token
/// service sits behind an `Arc`, the settings are `Copy` and `SpaceLocks`
/// shares one lock table between clones.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and validates access and refresh tokens.
    pub tokens: Arc<TokenService>,

    /// Crowd level thresholds and the versioned write retry bound.
    pub occupancy: OccupancySettings,

    /// Serializes occupancy writes per space.
    pub space_locks: SpaceLocks,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service built from the configured secret and lifetimes
    /// - `occupancy` - Occupancy settings
    pub fn new(db: DatabaseConnection, tokens: TokenService, occupancy: OccupancySettings) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
            occupancy,
            space_locks: SpaceLocks::new(),
        }
    }

    /// Builds the state from loaded configuration and a connected database.
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        let tokens = TokenService::new(
            &config.jwt_secret,
            config.access_token_ttl,
            config.refresh_token_ttl,
        );

        Self::new(db, tokens, config.occupancy)
    }
}
