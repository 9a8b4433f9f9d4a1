use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, IdDto},
        club::{
            AddChantDto, ChantDto, ClubDto, ClubRelationKeyDto, CreateClubDto, EditChantDto,
            EditClubDto,
        },
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            param::{ClubListParam, IncludeDeletedParam},
        },
        error::AppError,
        model::club::{
            ClubDetails, ClubRelationKey, CreateChantParams, CreateClubParams, GetClubsParams,
            UpdateClubParams,
        },
        service::club::ClubService,
        state::AppState,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

/// List clubs.
///
/// Returns active clubs ordered by id, each with its chants, fans and relations.
/// Soft-deleted clubs are only included when `include_deleted` is set. Pages hold at
/// most 100 clubs.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Offset, page size and soft-delete filter
///
/// # Returns
/// - `200 OK` - Page of clubs
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/club",
    tag = CLUB_TAG,
    params(ClubListParam),
    responses(
        (status = 200, description = "Successfully retrieved clubs", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clubs(
    State(state): State<AppState>,
    Query(params): Query<ClubListParam>,
) -> Result<impl IntoResponse, AppError> {
    let (skip, take) = params.pagination().bounded();
    let clubs = ClubService::new(&state.db)
        .get_clubs(GetClubsParams {
            skip,
            take,
            include_deleted: params.include_deleted,
        })
        .await?;

    let dtos: Vec<ClubDto> = clubs.into_iter().map(ClubDetails::into_dto).collect();

    Ok((StatusCode::OK, ApiResponse::ok(dtos)))
}

/// Get a club by id.
///
/// # Returns
/// - `200 OK` - Club with chants, fans and relations
/// - `404 Not Found` - No matching club
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/club/{id}",
    tag = CLUB_TAG,
    params(
        ("id" = i32, Path, description = "Club ID"),
        IncludeDeletedParam
    ),
    responses(
        (status = 200, description = "Successfully retrieved club", body = ClubDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<IncludeDeletedParam>,
) -> Result<impl IntoResponse, AppError> {
    let club = ClubService::new(&state.db)
        .get_club(id, params.include_deleted)
        .await?;

    Ok((StatusCode::OK, ApiResponse::ok(club.into_dto())))
}

/// Create a new club.
///
/// # Returns
/// - `201 Created` - The created club
/// - `400 Bad Request` - Blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/club",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Successfully created club", body = ClubDto),
        (status = 400, description = "Invalid club data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_club(
    State(state): State<AppState>,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let club = ClubService::new(&state.db)
        .add_club(CreateClubParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::ok(club.into_dto())))
}

/// Soft-delete a club.
///
/// The club disappears from default reads; its chants, fans, relations and brawls
/// are kept.
///
/// # Returns
/// - `200 OK` - Club deleted
/// - `404 Not Found` - Unknown or already deleted club
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/club/delete",
    tag = CLUB_TAG,
    request_body = IdDto,
    responses(
        (status = 200, description = "Successfully deleted club", body = bool),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_club(
    State(state): State<AppState>,
    Json(payload): Json<IdDto>,
) -> Result<impl IntoResponse, AppError> {
    ClubService::new(&state.db).delete_club(payload.id).await?;

    Ok((StatusCode::OK, ApiResponse::ok(true)))
}

/// Edit a club.
///
/// Omitted fields are left unchanged; nullable fields sent as `null` are cleared.
///
/// # Returns
/// - `200 OK` - Club updated
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - No active club with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/club/edit",
    tag = CLUB_TAG,
    request_body = EditClubDto,
    responses(
        (status = 200, description = "Successfully updated club", body = bool),
        (status = 400, description = "Invalid club data", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_club(
    State(state): State<AppState>,
    Json(payload): Json<EditClubDto>,
) -> Result<impl IntoResponse, AppError> {
    ClubService::new(&state.db)
        .edit_club(UpdateClubParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, ApiResponse::ok(true)))
}

/// Add a chant to a club.
///
/// # Returns
/// - `201 Created` - The created chant
/// - `400 Bad Request` - Unknown or deleted club, or blank lyrics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/club/chant/add",
    tag = CLUB_TAG,
    request_body = AddChantDto,
    responses(
        (status = 201, description = "Successfully added chant", body = ChantDto),
        (status = 400, description = "Invalid chant data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_chant(
    State(state): State<AppState>,
    Json(payload): Json<AddChantDto>,
) -> Result<impl IntoResponse, AppError> {
    let chant = ClubService::new(&state.db)
        .add_chant(CreateChantParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::ok(chant.into_dto())))
}

/// Replace the lyrics of a chant.
///
/// # Returns
/// - `200 OK` - Chant updated
/// - `400 Bad Request` - Blank lyrics
/// - `404 Not Found` - Unknown chant
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/club/chant/edit",
    tag = CLUB_TAG,
    request_body = EditChantDto,
    responses(
        (status = 200, description = "Successfully updated chant", body = bool),
        (status = 400, description = "Invalid chant data", body = ErrorDto),
        (status = 404, description = "Chant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_chant(
    State(state): State<AppState>,
    Json(payload): Json<EditChantDto>,
) -> Result<impl IntoResponse, AppError> {
    ClubService::new(&state.db)
        .edit_chant(payload.id, payload.lyrics)
        .await?;

    Ok((StatusCode::OK, ApiResponse::ok(true)))
}

/// Delete a chant.
///
/// # Returns
/// - `200 OK` - Chant deleted
/// - `404 Not Found` - Unknown chant
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/club/chant/delete",
    tag = CLUB_TAG,
    request_body = IdDto,
    responses(
        (status = 200, description = "Successfully deleted chant", body = bool),
        (status = 404, description = "Chant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chant(
    State(state): State<AppState>,
    Json(payload): Json<IdDto>,
) -> Result<impl IntoResponse, AppError> {
    ClubService::new(&state.db).delete_chant(payload.id).await?;

    Ok((StatusCode::OK, ApiResponse::ok(true)))
}

/// Relate two clubs.
///
/// Stores the relation in both directions.
///
/// # Returns
/// - `201 Created` - Both directions stored
/// - `400 Bad Request` - Self-relation, or an unknown or deleted club
/// - `409 Conflict` - The relation already exists in either direction
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/club/relation/add",
    tag = CLUB_TAG,
    request_body = ClubRelationKeyDto,
    responses(
        (status = 201, description = "Successfully added relation", body = bool),
        (status = 400, description = "Invalid relation", body = ErrorDto),
        (status = 409, description = "Relation already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_relation(
    State(state): State<AppState>,
    Json(payload): Json<ClubRelationKeyDto>,
) -> Result<impl IntoResponse, AppError> {
    ClubService::new(&state.db)
        .add_relation(ClubRelationKey::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::ok(true)))
}

/// Delete one direction of a relation.
///
/// # Returns
/// - `200 OK` - Relation deleted; its mirror is kept
/// - `404 Not Found` - No relation with that key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/club/relation/delete",
    tag = CLUB_TAG,
    request_body = ClubRelationKeyDto,
    responses(
        (status = 200, description = "Successfully deleted relation", body = bool),
        (status = 404, description = "Relation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_relation(
    State(state): State<AppState>,
    Json(payload): Json<ClubRelationKeyDto>,
) -> Result<impl IntoResponse, AppError> {
    ClubService::new(&state.db)
        .delete_relation(ClubRelationKey::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, ApiResponse::ok(true)))
}

/// Delete the first outgoing relation of a club.
///
/// For clients that address relations by a single club id. Prefer
/// `/club/relation/delete`, which names the exact relation.
///
/// # Returns
/// - `200 OK` - Relation deleted
/// - `404 Not Found` - The club has no outgoing relations
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/club/relation/delete-by-club",
    tag = CLUB_TAG,
    request_body = IdDto,
    responses(
        (status = 200, description = "Successfully deleted relation", body = bool),
        (status = 404, description = "No relation found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_relation_by_club(
    State(state): State<AppState>,
    Json(payload): Json<IdDto>,
) -> Result<impl IntoResponse, AppError> {
    ClubService::new(&state.db)
        .delete_relation_by_club(payload.id)
        .await?;

    Ok((StatusCode::OK, ApiResponse::ok(true)))
}
