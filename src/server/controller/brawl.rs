use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, IdDto},
        brawl::{BrawlDto, CreateBrawlDto, EditBrawlDto},
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            param::PaginationParam,
        },
        error::AppError,
        model::brawl::{AddBrawlParams, BrawlDetails, EditBrawlParams},
        service::brawl::BrawlService,
        state::AppState,
    },
};

/// Tag for grouping brawl endpoints in OpenAPI documentation
pub static BRAWL_TAG: &str = "brawl";

/// List brawls ordered by id.
///
/// Pages hold at most 100 brawls.
#[utoipa::path(
    get,
    path = "/brawl",
    tag = BRAWL_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved brawls", body = Vec<BrawlDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brawls(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let (skip, take) = params.bounded();
    let brawls = BrawlService::new(&state.db).get_brawls(skip, take).await?;

    let dtos: Vec<BrawlDto> = brawls.into_iter().map(BrawlDetails::into_dto).collect();

    Ok((StatusCode::OK, ApiResponse::ok(dtos)))
}

/// Get a brawl by id.
///
/// # Returns
/// - `200 OK` - Brawl with both club names and the date as `YYYY.MM.DD HH:MM:SS`
/// - `404 Not Found` - Unknown brawl
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/brawl/{id}",
    tag = BRAWL_TAG,
    params(
        ("id" = i32, Path, description = "Brawl ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved brawl", body = BrawlDto),
        (status = 404, description = "Brawl not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brawl(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let brawl = BrawlService::new(&state.db).get_brawl(id).await?;

    Ok((StatusCode::OK, ApiResponse::ok(brawl.into_dto())))
}

/// Record a brawl.
///
/// Clubs are given by name; a club is created when no active club has that name.
///
/// # Returns
/// - `201 Created` - The recorded brawl
/// - `400 Bad Request` - Malformed date, blank or identical club names
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/brawl",
    tag = BRAWL_TAG,
    request_body = CreateBrawlDto,
    responses(
        (status = 201, description = "Successfully recorded brawl", body = BrawlDto),
        (status = 400, description = "Invalid brawl data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_brawl(
    State(state): State<AppState>,
    Json(payload): Json<CreateBrawlDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AddBrawlParams::from_dto(payload)?;
    let brawl = BrawlService::new(&state.db).add_brawl(params).await?;

    Ok((StatusCode::CREATED, ApiResponse::ok(brawl.into_dto())))
}

/// Edit a brawl.
///
/// # Returns
/// - `200 OK` - Brawl updated
/// - `400 Bad Request` - Malformed date, or both sides would be the same club
/// - `404 Not Found` - Unknown brawl
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/brawl/edit",
    tag = BRAWL_TAG,
    request_body = EditBrawlDto,
    responses(
        (status = 200, description = "Successfully updated brawl", body = bool),
        (status = 400, description = "Invalid brawl data", body = ErrorDto),
        (status = 404, description = "Brawl not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_brawl(
    State(state): State<AppState>,
    Json(payload): Json<EditBrawlDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = EditBrawlParams::from_dto(payload)?;
    BrawlService::new(&state.db).edit_brawl(params).await?;

    Ok((StatusCode::OK, ApiResponse::ok(true)))
}

/// Delete a brawl.
#[utoipa::path(
    post,
    path = "/brawl/delete",
    tag = BRAWL_TAG,
    request_body = IdDto,
    responses(
        (status = 200, description = "Successfully deleted brawl", body = bool),
        (status = 404, description = "Brawl not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_brawl(
    State(state): State<AppState>,
    Json(payload): Json<IdDto>,
) -> Result<impl IntoResponse, AppError> {
    BrawlService::new(&state.db).delete_brawl(payload.id).await?;

    Ok((StatusCode::OK, ApiResponse::ok(true)))
}
