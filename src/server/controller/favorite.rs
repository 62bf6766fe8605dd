use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto, PaginatedDto},
        favorite::FavoriteDto,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::favorite::Favorite,
        service::favorite::FavoriteService,
        state::AppState,
        util::extract::{AppPath, AppQuery},
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Add a space to the caller's favorites.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The favorite with its space
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No space with that id
/// - `409 Conflict` - Space is already a favorite
#[utoipa::path(
    post,
    path = "/spaces/{id}/favorite",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Space ID")
    ),
    responses(
        (status = 201, description = "Favorite added", body = ApiResponse<FavoriteDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 409, description = "Space already favorited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(space_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let favorite = FavoriteService::new(&state.db)
        .add(user.id, space_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Favorite added", favorite.into_dto())),
    ))
}

/// Remove a space from the caller's favorites.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Favorite removed
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Space was not a favorite
#[utoipa::path(
    delete,
    path = "/spaces/{id}/favorite",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Space ID")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(space_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    FavoriteService::new(&state.db)
        .remove(user.id, space_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite removed"))))
}

/// List the caller's favorite spaces, most recent first.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - One page of favorites
/// - `400 Bad Request` - Page size out of range
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/users/me/favorites",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(PaginationParam),
    responses(
        (status = 200, description = "Favorites retrieved", body = ApiResponse<PaginatedDto<FavoriteDto>>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;
    params.validate()?;

    let favorites = FavoriteService::new(&state.db)
        .list(user.id, params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Favorites retrieved",
            favorites.into_dto(Favorite::into_dto),
        )),
    ))
}
