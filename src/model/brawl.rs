use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBrawlDto {
    pub first_club_name: String,
    pub second_club_name: String,
    /// Format: "YYYY.MM.DD HH:MM:SS"
    pub date: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// Partial update of a brawl; omitted fields are left untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct EditBrawlDto {
    pub id: i32,
    #[serde(default)]
    pub first_club_name: Option<String>,
    #[serde(default)]
    pub second_club_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BrawlDto {
    pub id: i32,
    pub first_club_id: i32,
    pub first_club_name: String,
    pub second_club_id: i32,
    pub second_club_name: String,
    pub date: String, // Format: "YYYY.MM.DD HH:MM:SS"
    pub longitude: f64,
    pub latitude: f64,
}
