use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto, PaginatedDto},
        space::{CreateSpaceDto, SpaceDto, UpdateSpaceDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::space::{CreateSpaceParam, Space},
        service::{occupancy::OccupancyService, space::SpaceService},
        state::AppState,
        util::extract::{AppJson, AppPath, AppQuery},
    },
};

/// Tag for grouping space endpoints in OpenAPI documentation
pub static SPACE_TAG: &str = "space";

/// Create a new space owned by the caller.
///
/// # Access Control
/// - `OWNER`, `ADMIN`
///
/// # Arguments
/// - `payload` - Name, address, capacity and optional description
///
/// # Returns
/// - `201 Created` - The new space
/// - `400 Bad Request` - Blank name/address or non-positive capacity
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is a plain `USER`
#[utoipa::path(
    post,
    path = "/spaces",
    tag = SPACE_TAG,
    security(("bearer" = [])),
    request_body = CreateSpaceDto,
    responses(
        (status = 201, description = "Space created", body = ApiResponse<SpaceDto>),
        (status = 400, description = "Invalid space data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not create spaces", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_space(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateSpaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::CreateSpace])
        .await?;

    let space = SpaceService::new(&state.db)
        .create(CreateSpaceParam::from_dto(user.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Space created", space.into_dto())),
    ))
}

/// List spaces.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - One page of spaces
/// - `400 Bad Request` - Page size out of range
#[utoipa::path(
    get,
    path = "/spaces",
    tag = SPACE_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Spaces retrieved", body = ApiResponse<PaginatedDto<SpaceDto>>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spaces(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let spaces = SpaceService::new(&state.db)
        .list(params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Spaces retrieved", spaces.into_dto(Space::into_dto))),
    ))
}

/// Get a space by ID.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The space
/// - `404 Not Found` - No space with that id
#[utoipa::path(
    get,
    path = "/spaces/{id}",
    tag = SPACE_TAG,
    params(
        ("id" = i32, Path, description = "Space ID")
    ),
    responses(
        (status = 200, description = "Space retrieved", body = ApiResponse<SpaceDto>),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_space(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let space = SpaceService::new(&state.db).get(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Space retrieved", space.into_dto())),
    ))
}

/// Update a space. Fields left out of the body keep their current value.
///
/// A new capacity also recomputes the space's current occupancy percentage
/// and crowd level from the last reported count.
///
/// # Access Control
/// - Owner of the space, or `ADMIN`
///
/// # Returns
/// - `200 OK` - Updated space
/// - `400 Bad Request` - A provided field is invalid
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller neither owns the space nor is an admin
/// - `404 Not Found` - No space with that id
#[utoipa::path(
    put,
    path = "/spaces/{id}",
    tag = SPACE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Space ID")
    ),
    request_body = UpdateSpaceDto,
    responses(
        (status = 200, description = "Space updated", body = ApiResponse<SpaceDto>),
        (status = 400, description = "Invalid space data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not modify this space", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_space(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateSpaceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_space_owner(id)
        .await?;

    let capacity_changed = payload.capacity.is_some();

    let space = SpaceService::new(&state.db)
        .update(id, payload.into())
        .await?;

    if capacity_changed {
        OccupancyService::new(&state.db, &state.occupancy, &state.space_locks)
            .apply_capacity(space.id)
            .await?;
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Space updated", space.into_dto())),
    ))
}

/// Delete a space together with its readings, reviews and favorites.
///
/// # Access Control
/// - Owner of the space, or `ADMIN`
///
/// # Returns
/// - `200 OK` - Space deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller neither owns the space nor is an admin
/// - `404 Not Found` - No space with that id
#[utoipa::path(
    delete,
    path = "/spaces/{id}",
    tag = SPACE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Space ID")
    ),
    responses(
        (status = 200, description = "Space deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not modify this space", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_space(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_space_owner(id)
        .await?;

    SpaceService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Space deleted"))))
}
