use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::api::deserialize_present;

/// Kind of a directed relation between two clubs.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Alliance,
    Friendship,
    Rival,
}

impl RelationKind {
    /// Textual form, identical to the serialized and stored value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alliance => "alliance",
            Self::Friendship => "friendship",
            Self::Rival => "rival",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "alliance" => Ok(Self::Alliance),
            "friendship" => Ok(Self::Friendship),
            "rival" => Ok(Self::Rival),
            other => Err(format!("Unknown relation kind '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClubDto {
    pub id: i32,
    pub name: String,
    pub league: Option<String>,
    pub logo_uri: Option<String>,
    pub city: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub is_deleted: bool,
    pub chants: Vec<ChantDto>,
    pub relations: Vec<ClubRelationDto>,
    pub fans: Vec<FanDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChantDto {
    pub id: i32,
    pub club_id: i32,
    pub lyrics: String,
}

/// Relation as seen from the club being viewed: the counterpart club and the kind.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClubRelationDto {
    pub club_id: i32,
    pub club_name: String,
    pub relation: RelationKind,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FanDto {
    pub member_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateClubDto {
    pub name: String,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub logo_uri: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
}

/// Partial update of a club.
///
/// Omitted fields are left untouched. Nullable fields accept an explicit `null`
/// to clear the stored value.
#[derive(Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct EditClubDto {
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub league: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub logo_uri: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<f64>)]
    pub longitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<f64>)]
    pub latitude: Option<Option<f64>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddChantDto {
    pub club_id: i32,
    pub lyrics: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EditChantDto {
    pub id: i32,
    pub lyrics: String,
}

/// Full key of a directed relation. Used both to add a mirrored pair and to
/// delete a single direction.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClubRelationKeyDto {
    pub first_club_id: i32,
    pub second_club_id: i32,
    pub relation: RelationKind,
}
