use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the list of required variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },

    /// JWT signing secret is shorter than the minimum length.
    #[error("JWT_SECRET must be at least {min} bytes, got {actual}")]
    WeakJwtSecret { min: usize, actual: usize },

    /// Crowd level thresholds are not strictly increasing within (0, 100].
    #[error("Invalid crowd level thresholds: {0}")]
    InvalidThresholds(String),

    /// The database has migrations that have not been applied yet.
    ///
    /// The server never migrates on its own; run the `migration` binary first.
    #[error("Database schema is out of date, pending migrations: {}", .0.join(", "))]
    PendingMigrations(Vec<String>),
}
