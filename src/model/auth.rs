use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::Role;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SignupDto {
    pub email: String,
    pub password: String,
    pub name: String,
    /// Defaults to `USER`. `ADMIN` cannot be self-assigned.
    pub role: Option<Role>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct RefreshDto {
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct TokenPairDto {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}
