use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth::*, favorite::*, occupancy::*, review::*, space::*, user::*},
    state::AppState,
};

/// Prefix every API route is nested under.
pub const API_BASE_PATH: &str = "/api/v1";

#[derive(OpenApi)]
#[openapi(
    info(title = "ZeroQ API", description = "Occupancy tracking for physical spaces"),
    modifiers(&SecurityAddon),
    tags(
        (name = AUTH_TAG, description = "Signup, login and token refresh"),
        (name = USER_TAG, description = "Profiles and user administration"),
        (name = SPACE_TAG, description = "Spaces and their metadata"),
        (name = OCCUPANCY_TAG, description = "Occupancy reports and history"),
        (name = REVIEW_TAG, description = "Space reviews"),
        (name = FAVORITE_TAG, description = "Favorite spaces")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` JWT scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete application router.
///
/// API routes live under `/api/v1`; the OpenAPI document is served at
/// `/api-docs/openapi.json` with Swagger UI at `/swagger-ui`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `cors_origins` - Allowed origins, empty for any
pub fn router(state: AppState, cors_origins: &[HeaderValue]) -> Router {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(API_BASE_PATH, api_routes())
        .split_for_parts();

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(signup))
        .routes(routes!(login))
        .routes(routes!(refresh))
        .routes(routes!(get_me, update_me))
        .routes(routes!(get_favorites))
        .routes(routes!(get_users))
        .routes(routes!(update_role))
        .routes(routes!(delete_user))
        .routes(routes!(create_space, get_spaces))
        .routes(routes!(get_space, update_space, delete_space))
        .routes(routes!(report_occupancy, get_occupancy))
        .routes(routes!(get_occupancy_history))
        .routes(routes!(create_review, get_reviews))
        .routes(routes!(update_review, delete_review))
        .routes(routes!(add_favorite, remove_favorite))
}

fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins.iter().cloned())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
