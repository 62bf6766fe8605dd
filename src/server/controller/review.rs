use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto, PaginatedDto},
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::{CreateReviewParam, Review},
        service::review::ReviewService,
        state::AppState,
        util::extract::{AppJson, AppPath, AppQuery},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Review a space. Each user may review a space once.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The new review
/// - `400 Bad Request` - Rating outside 1 to 5 or blank content
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No space with that id
/// - `409 Conflict` - Caller already reviewed this space
#[utoipa::path(
    post,
    path = "/spaces/{id}/reviews",
    tag = REVIEW_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Space ID")
    ),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 409, description = "Space already reviewed by this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(space_id): AppPath<i32>,
    AppJson(payload): AppJson<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let review = ReviewService::new(&state.db)
        .create(CreateReviewParam::from_dto(user.id, space_id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Review created", review.into_dto())),
    ))
}

/// List reviews of a space, newest first.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - One page of reviews
/// - `400 Bad Request` - Page size out of range
/// - `404 Not Found` - No space with that id
#[utoipa::path(
    get,
    path = "/spaces/{id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Space ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Reviews retrieved", body = ApiResponse<PaginatedDto<ReviewDto>>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    AppPath(space_id): AppPath<i32>,
    AppQuery(params): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let reviews = ReviewService::new(&state.db)
        .list_by_space(space_id, params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Reviews retrieved", reviews.into_dto(Review::into_dto))),
    ))
}

/// Edit a review.
///
/// # Access Control
/// - Author of the review
///
/// # Returns
/// - `200 OK` - Updated review
/// - `400 Bad Request` - A provided field is invalid
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not the author
/// - `404 Not Found` - No review with that id
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = REVIEW_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let review = ReviewService::new(&state.db)
        .update(&user, id, payload.into())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Review updated", review.into_dto())),
    ))
}

/// Delete a review.
///
/// # Access Control
/// - Author of the review, or `ADMIN`
///
/// # Returns
/// - `200 OK` - Review deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is neither author nor admin
/// - `404 Not Found` - No review with that id
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = REVIEW_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not delete this review", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    ReviewService::new(&state.db).delete(&user, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Review deleted"))))
}
