use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope wrapping every response payload.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Success envelope for operations that return no payload (deletes).
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Error envelope. `code` is one of `NOT_FOUND`, `CONFLICT`, `UNAUTHORIZED`,
/// `FORBIDDEN`, `VALIDATION_ERROR` or `INTERNAL_ERROR`.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub success: bool,
    pub code: String,
    pub message: String,
}

/// One page of results plus pagination metadata.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
