use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub name: String,
    pub club_id: Option<i32>,
    pub club_name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMemberDto {
    pub name: String,
    #[serde(default)]
    pub club_id: Option<i32>,
}

/// Moves a member to another club, or out of any club when `club_id` is null.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetMemberClubDto {
    pub id: i32,
    #[serde(default)]
    pub club_id: Option<i32>,
}
