use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{LoginDto, RefreshDto, SignupDto, TokenPairDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        service::auth::AuthService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// The role defaults to `USER`. `OWNER` may be requested; `ADMIN` can only be
/// granted by an existing admin.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Invalid email, short password or blank name
/// - `403 Forbidden` - `ADMIN` role requested
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 403, description = "Admin role cannot be self-assigned", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.tokens)
        .signup(payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Signup successful", user.into_dto())),
    ))
}

/// Exchange email and password for an access/refresh token pair.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Token pair
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<TokenPairDto>),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Login successful", tokens.into_dto())),
    ))
}

/// Exchange a refresh token for a new token pair.
///
/// # Access Control
/// - Public; the refresh token in the body is the credential
///
/// # Returns
/// - `200 OK` - New token pair carrying the user's current role
/// - `401 Unauthorized` - Invalid or expired token, an access token, or a
///   deleted user
#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "Tokens refreshed", body = ApiResponse<TokenPairDto>),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.tokens)
        .refresh(&payload.refresh_token)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Token refreshed", tokens.into_dto())),
    ))
}
