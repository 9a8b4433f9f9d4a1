use std::time::Duration;

use axum::Router;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{brawl, club, member},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kibol Alert",
        description = "Directory of football fan clubs, their relations, chants, fans and brawls"
    ),
    components(schemas(ErrorDto)),
    tags(
        (name = "club", description = "Clubs, chants and club relations"),
        (name = "brawl", description = "Brawls between clubs"),
        (name = "member", description = "Fan membership")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Registers every endpoint together with its OpenAPI description, serves Swagger UI
/// at `/api/docs`, and wraps the routes in request tracing, a per-request timeout and
/// a permissive CORS policy.
///
/// # Arguments
/// - `state` - Shared application state
/// - `request_timeout` - Upper bound on handling a single request
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(club::get_clubs, club::add_club))
        .routes(routes!(club::get_club))
        .routes(routes!(club::delete_club))
        .routes(routes!(club::edit_club))
        .routes(routes!(club::add_chant))
        .routes(routes!(club::edit_chant))
        .routes(routes!(club::delete_chant))
        .routes(routes!(club::add_relation))
        .routes(routes!(club::delete_relation))
        .routes(routes!(club::delete_relation_by_club))
        .routes(routes!(brawl::get_brawls, brawl::add_brawl))
        .routes(routes!(brawl::get_brawl))
        .routes(routes!(brawl::edit_brawl))
        .routes(routes!(brawl::delete_brawl))
        .routes(routes!(member::add_member))
        .routes(routes!(member::get_member))
        .routes(routes!(member::set_member_club))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
}
