//! Space domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::space::{CreateSpaceDto, SpaceDto, UpdateSpaceDto},
    server::error::AppError,
};

/// A physical location whose occupancy is tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub address: String,
    /// Maximum number of people. Always greater than zero for spaces created
    /// through the API.
    pub capacity: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Space {
    pub fn into_dto(self) -> SpaceDto {
        SpaceDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            address: self.address,
            capacity: self.capacity,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::space::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            address: entity.address,
            capacity: entity.capacity,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a space owned by `owner_id`.
#[derive(Debug, Clone)]
pub struct CreateSpaceParam {
    pub owner_id: i32,
    pub name: String,
    pub address: String,
    pub capacity: i32,
    pub description: Option<String>,
}

impl CreateSpaceParam {
    pub fn from_dto(owner_id: i32, dto: CreateSpaceDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            address: dto.address,
            capacity: dto.capacity,
            description: dto.description,
        }
    }

    /// Rejects blank names or addresses and non-positive capacities.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)?;
        validate_address(&self.address)?;
        validate_capacity(self.capacity)
    }
}

/// Partial space update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateSpaceParam {
    pub name: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
}

impl From<UpdateSpaceDto> for UpdateSpaceParam {
    fn from(dto: UpdateSpaceDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            capacity: dto.capacity,
            description: dto.description,
        }
    }
}

impl UpdateSpaceParam {
    /// Validates only the fields that are present.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(address) = &self.address {
            validate_address(address)?;
        }
        if let Some(capacity) = self.capacity {
            validate_capacity(capacity)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Space name must not be empty".to_string()));
    }
    Ok(())
}

fn validate_address(address: &str) -> Result<(), AppError> {
    if address.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Space address must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_capacity(capacity: i32) -> Result<(), AppError> {
    if capacity <= 0 {
        return Err(AppError::BadRequest(format!(
            "Capacity must be greater than zero, got {}",
            capacity
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(capacity: i32) -> CreateSpaceParam {
        CreateSpaceParam {
            owner_id: 1,
            name: "Library".to_string(),
            address: "1 Main St".to_string(),
            capacity,
            description: None,
        }
    }

    #[test]
    fn rejects_non_positive_capacity() {
        assert!(param(1).validate().is_ok());
        assert!(matches!(param(0).validate(), Err(AppError::BadRequest(_))));
        assert!(matches!(param(-5).validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn update_validates_only_present_fields() {
        assert!(UpdateSpaceParam::default().validate().is_ok());

        let blank_name = UpdateSpaceParam {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(blank_name.validate(), Err(AppError::BadRequest(_))));
    }
}
