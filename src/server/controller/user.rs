use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto, PaginatedDto},
        user::{UpdateProfileDto, UpdateRoleDto, UserDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::User,
        service::user::UserService,
        state::AppState,
        util::extract::{AppJson, AppPath, AppQuery},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the signed-in user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("User retrieved", user.into_dto())),
    ))
}

/// Update the signed-in user's name and/or password.
///
/// Fields left out of the body keep their current value.
///
/// # Access Control
/// - Any authenticated user, on their own profile
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Blank name or short password
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    put,
    path = "/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let updated = UserService::new(&state.db)
        .update_profile(user.id, payload.into())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Profile updated", updated.into_dto())),
    ))
}

/// List all users.
///
/// # Access Control
/// - `ADMIN`
///
/// # Arguments
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - One page of users
/// - `400 Bad Request` - Page size out of range
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(PaginationParam),
    responses(
        (status = 200, description = "Users retrieved", body = ApiResponse<PaginatedDto<UserDto>>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageUsers])
        .await?;
    params.validate()?;

    let users = UserService::new(&state.db)
        .get_all_users(params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Users retrieved", users.into_dto(User::into_dto))),
    ))
}

/// Change a user's role.
///
/// # Access Control
/// - `ADMIN`
///
/// # Returns
/// - `200 OK` - User with the new role
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/users/{id}/role",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageUsers])
        .await?;

    let user = UserService::new(&state.db)
        .set_role(id, payload.role)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Role updated", user.into_dto())),
    ))
}

/// Delete a user along with their spaces, reviews and favorites.
///
/// # Access Control
/// - `ADMIN`
///
/// # Returns
/// - `200 OK` - User deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageUsers])
        .await?;

    UserService::new(&state.db).delete_user(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}
