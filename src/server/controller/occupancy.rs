use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PaginatedDto},
        occupancy::{CurrentOccupancyDto, OccupancyReadingDto, ReportOccupancyDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::occupancy::{OccupancyReading, ReportOccupancyParam},
        service::occupancy::OccupancyService,
        state::AppState,
        util::extract::{AppJson, AppPath, AppQuery},
    },
};

/// Tag for grouping occupancy endpoints in OpenAPI documentation
pub static OCCUPANCY_TAG: &str = "occupancy";

/// Report a head count for a space.
///
/// The reading is appended to the space's log and the current occupancy is
/// recomputed. Counts above capacity are accepted; the percentage is capped
/// at 100.
///
/// # Access Control
/// - Owner of the space, or `ADMIN`
///
/// # Returns
/// - `201 Created` - The current occupancy written by this report
/// - `400 Bad Request` - Negative count, or the space has no usable capacity
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller neither owns the space nor is an admin
/// - `404 Not Found` - No space with that id
/// - `409 Conflict` - Concurrent writers kept winning the versioned update
#[utoipa::path(
    post,
    path = "/spaces/{id}/occupancy",
    tag = OCCUPANCY_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Space ID")
    ),
    request_body = ReportOccupancyDto,
    responses(
        (status = 201, description = "Reading recorded", body = ApiResponse<CurrentOccupancyDto>),
        (status = 400, description = "Invalid reading", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not report for this space", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 409, description = "Concurrent update conflict", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn report_occupancy(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ReportOccupancyDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_space_owner(id)
        .await?;

    let current = OccupancyService::new(&state.db, &state.occupancy, &state.space_locks)
        .report(ReportOccupancyParam::from_dto(id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Occupancy recorded", current.into_dto())),
    ))
}

/// Get the current occupancy of a space.
///
/// A space without readings reports a count of 0, `EMPTY` and a null
/// `updated_at`.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Current occupancy
/// - `404 Not Found` - No space with that id
#[utoipa::path(
    get,
    path = "/spaces/{id}/occupancy",
    tag = OCCUPANCY_TAG,
    params(
        ("id" = i32, Path, description = "Space ID")
    ),
    responses(
        (status = 200, description = "Occupancy retrieved", body = ApiResponse<CurrentOccupancyDto>),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_occupancy(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let current = OccupancyService::new(&state.db, &state.occupancy, &state.space_locks)
        .current(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Occupancy retrieved", current.into_dto())),
    ))
}

/// Get the reading log of a space, newest first.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - One page of readings
/// - `400 Bad Request` - Page size out of range
/// - `404 Not Found` - No space with that id
#[utoipa::path(
    get,
    path = "/spaces/{id}/occupancy/history",
    tag = OCCUPANCY_TAG,
    params(
        ("id" = i32, Path, description = "Space ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Readings retrieved", body = ApiResponse<PaginatedDto<OccupancyReadingDto>>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "Space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_occupancy_history(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppQuery(params): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let readings = OccupancyService::new(&state.db, &state.occupancy, &state.space_locks)
        .history(id, params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Readings retrieved",
            readings.into_dto(OccupancyReading::into_dto),
        )),
    ))
}
