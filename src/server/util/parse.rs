use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an enum value stored as text in the database.
///
/// Stored values are written by this application, so a failure means the row
/// was modified out of band or the enum lost a variant.
///
/// # Arguments
/// - `column` - Name of the column the value came from, for logging
/// - `value` - The stored text
/// - `id` - Primary key of the row, for logging
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - Unknown stored value
pub fn parse_stored<T: FromStr>(column: &'static str, value: String, id: i32) -> Result<T, AppError> {
    value.parse::<T>().map_err(|_| {
        InternalError::InvalidStoredValue { column, value, id }.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{occupancy::CrowdLevel, user::Role};

    #[test]
    fn parses_known_values() {
        let role: Role = parse_stored("role", "OWNER".to_string(), 1).unwrap();
        let level: CrowdLevel = parse_stored("crowd_level", "HIGH".to_string(), 1).unwrap();

        assert_eq!(role, Role::Owner);
        assert_eq!(level, CrowdLevel::High);
    }

    #[test]
    fn unknown_value_is_an_internal_error() {
        let result = parse_stored::<Role>("role", "ROOT".to_string(), 7);

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::InvalidStoredValue { id: 7, .. }))
        ));
    }
}
