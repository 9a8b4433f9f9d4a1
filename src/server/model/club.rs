//! Club domain models and parameters.
//!
//! Covers clubs, their chants, fans and relations, plus the parameter types used
//! by create/update/delete operations and the assembled `ClubDetails` view.

use sea_orm::DbErr;

use crate::model::club::{
    AddChantDto, ChantDto, ClubDto, ClubRelationDto, ClubRelationKeyDto, CreateClubDto,
    EditClubDto, FanDto, RelationKind,
};

/// A club row without its related collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub league: Option<String>,
    pub logo_uri: Option<String>,
    pub city: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Soft-delete flag; deleted clubs are hidden from default reads.
    pub is_deleted: bool,
}

impl Club {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::club::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            league: entity.league,
            logo_uri: entity.logo_uri,
            city: entity.city,
            longitude: entity.longitude,
            latitude: entity.latitude,
            is_deleted: entity.is_deleted,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chant {
    pub id: i32,
    pub club_id: i32,
    pub lyrics: String,
}

impl Chant {
    pub fn from_entity(entity: entity::chant::Model) -> Self {
        Self {
            id: entity.id,
            club_id: entity.club_id,
            lyrics: entity.lyrics,
        }
    }

    pub fn into_dto(self) -> ChantDto {
        ChantDto {
            id: self.id,
            club_id: self.club_id,
            lyrics: self.lyrics,
        }
    }
}

/// A member as listed among a club's fans.
#[derive(Debug, Clone, PartialEq)]
pub struct Fan {
    pub member_id: i32,
    pub name: String,
}

impl Fan {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            member_id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> FanDto {
        FanDto {
            member_id: self.member_id,
            name: self.name,
        }
    }
}

/// Full key of one directed relation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClubRelationKey {
    pub first_club_id: i32,
    pub second_club_id: i32,
    pub kind: RelationKind,
}

impl ClubRelationKey {
    /// Converts a stored relation row, parsing the textual kind.
    ///
    /// # Returns
    /// - `Ok(ClubRelationKey)` - Successfully converted key
    /// - `Err(DbErr::Custom)` - Stored kind is not a known relation kind
    pub fn from_entity(entity: entity::club_relation::Model) -> Result<Self, DbErr> {
        let kind = entity
            .kind
            .parse::<RelationKind>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse relation kind: {}", e)))?;

        Ok(Self {
            first_club_id: entity.first_club_id,
            second_club_id: entity.second_club_id,
            kind,
        })
    }

    pub fn from_dto(dto: ClubRelationKeyDto) -> Self {
        Self {
            first_club_id: dto.first_club_id,
            second_club_id: dto.second_club_id,
            kind: dto.relation,
        }
    }

    /// The same relation pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            first_club_id: self.second_club_id,
            second_club_id: self.first_club_id,
            kind: self.kind,
        }
    }
}

/// A relation from the point of view of one club: who the counterpart is and how
/// they relate.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedClub {
    pub club_id: i32,
    pub club_name: String,
    pub kind: RelationKind,
}

impl RelatedClub {
    pub fn into_dto(self) -> ClubRelationDto {
        ClubRelationDto {
            club_id: self.club_id,
            club_name: self.club_name,
            relation: self.kind,
        }
    }
}

/// A club together with its chants, incoming relations and fans.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubDetails {
    pub club: Club,
    pub chants: Vec<Chant>,
    pub relations: Vec<RelatedClub>,
    pub fans: Vec<Fan>,
}

impl ClubDetails {
    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.club.id,
            name: self.club.name,
            league: self.club.league,
            logo_uri: self.club.logo_uri,
            city: self.club.city,
            longitude: self.club.longitude,
            latitude: self.club.latitude,
            is_deleted: self.club.is_deleted,
            chants: self.chants.into_iter().map(Chant::into_dto).collect(),
            relations: self.relations.into_iter().map(RelatedClub::into_dto).collect(),
            fans: self.fans.into_iter().map(Fan::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new club.
#[derive(Debug, Clone, Default)]
pub struct CreateClubParams {
    pub name: String,
    pub league: Option<String>,
    pub logo_uri: Option<String>,
    pub city: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl CreateClubParams {
    pub fn from_dto(dto: CreateClubDto) -> Self {
        Self {
            name: dto.name,
            league: dto.league,
            logo_uri: dto.logo_uri,
            city: dto.city,
            longitude: dto.longitude,
            latitude: dto.latitude,
        }
    }
}

/// Parameters for patching an existing club.
///
/// `None` leaves a field untouched. For nullable columns the inner option is the
/// new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateClubParams {
    pub id: i32,
    pub name: Option<String>,
    pub league: Option<Option<String>>,
    pub logo_uri: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub longitude: Option<Option<f64>>,
    pub latitude: Option<Option<f64>>,
}

impl UpdateClubParams {
    pub fn from_dto(dto: EditClubDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            league: dto.league,
            logo_uri: dto.logo_uri,
            city: dto.city,
            longitude: dto.longitude,
            latitude: dto.latitude,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateChantParams {
    pub club_id: i32,
    pub lyrics: String,
}

impl CreateChantParams {
    pub fn from_dto(dto: AddChantDto) -> Self {
        Self {
            club_id: dto.club_id,
            lyrics: dto.lyrics,
        }
    }
}

/// Parameters for listing clubs.
#[derive(Debug, Clone, Copy)]
pub struct GetClubsParams {
    pub skip: u64,
    pub take: u64,
    /// Include soft-deleted clubs, for audit reads.
    pub include_deleted: bool,
}
