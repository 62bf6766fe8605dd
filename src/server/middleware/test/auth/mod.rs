use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::auth::token::TokenService,
};

mod require;
mod require_space_owner;

const SECRET: &str = "middleware-test-secret-at-least-32-bytes";

fn tokens() -> TokenService {
    TokenService::new(SECRET, Duration::minutes(15), Duration::days(14))
}

/// Token service whose tokens are already expired when issued.
fn expired_tokens() -> TokenService {
    TokenService::new(SECRET, Duration::minutes(-5), Duration::minutes(-5))
}

/// Builds request headers carrying a fresh access token for the user.
fn headers_for(tokens: &TokenService, user: entity::user::Model) -> HeaderMap {
    let user = User::from_entity(user).unwrap();
    let pair = tokens.issue_pair(&user).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", pair.access_token)).unwrap(),
    );
    headers
}
