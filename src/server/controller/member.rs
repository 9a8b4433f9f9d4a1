use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        member::{CreateMemberDto, MemberDto, SetMemberClubDto},
    },
    server::{
        controller::extract::{Json, Path},
        error::AppError,
        model::member::CreateMemberParams,
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Register a member, optionally as a fan of a club.
///
/// # Returns
/// - `201 Created` - The created member
/// - `400 Bad Request` - Blank name, or an unknown or deleted club
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/member",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Successfully created member", body = MemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_member(
    State(state): State<AppState>,
    Json(payload): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .add_member(CreateMemberParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::ok(member.into_dto())))
}

#[utoipa::path(
    get,
    path = "/member/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).get_member(id).await?;

    Ok((StatusCode::OK, ApiResponse::ok(member.into_dto())))
}

/// Move a member to another club, or out of any club when `club_id` is null.
///
/// # Returns
/// - `200 OK` - Affiliation replaced
/// - `400 Bad Request` - Unknown or deleted club
/// - `404 Not Found` - Unknown member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/member/club",
    tag = MEMBER_TAG,
    request_body = SetMemberClubDto,
    responses(
        (status = 200, description = "Successfully updated membership", body = bool),
        (status = 400, description = "Invalid club", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_member_club(
    State(state): State<AppState>,
    Json(payload): Json<SetMemberClubDto>,
) -> Result<impl IntoResponse, AppError> {
    MemberService::new(&state.db)
        .set_member_club(payload.id, payload.club_id)
        .await?;

    Ok((StatusCode::OK, ApiResponse::ok(true)))
}
