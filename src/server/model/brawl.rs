//! Brawl domain models and parameters.
//!
//! Brawls reference their clubs by id in storage but are addressed by club name on
//! the wire. `AddBrawlParams`/`EditBrawlParams` carry the name-based input of the
//! service, while `CreateBrawlParams`/`UpdateBrawlParams` carry resolved club ids
//! down to the repository.

use chrono::NaiveDateTime;

use crate::{
    model::brawl::{BrawlDto, CreateBrawlDto, EditBrawlDto},
    server::{
        error::AppError,
        util::parse::{format_brawl_date, parse_brawl_date},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Brawl {
    pub id: i32,
    pub first_club_id: i32,
    pub second_club_id: i32,
    pub date: NaiveDateTime,
    pub longitude: f64,
    pub latitude: f64,
}

impl Brawl {
    pub fn from_entity(entity: entity::brawl::Model) -> Self {
        Self {
            id: entity.id,
            first_club_id: entity.first_club_id,
            second_club_id: entity.second_club_id,
            date: entity.date,
            longitude: entity.longitude,
            latitude: entity.latitude,
        }
    }
}

/// A brawl with the names of both participating clubs.
#[derive(Debug, Clone, PartialEq)]
pub struct BrawlDetails {
    pub brawl: Brawl,
    pub first_club_name: String,
    pub second_club_name: String,
}

impl BrawlDetails {
    /// Converts to a DTO, rendering the date back in the `YYYY.MM.DD HH:MM:SS` form.
    pub fn into_dto(self) -> BrawlDto {
        BrawlDto {
            id: self.brawl.id,
            first_club_id: self.brawl.first_club_id,
            first_club_name: self.first_club_name,
            second_club_id: self.brawl.second_club_id,
            second_club_name: self.second_club_name,
            date: format_brawl_date(&self.brawl.date),
            longitude: self.brawl.longitude,
            latitude: self.brawl.latitude,
        }
    }
}

/// Validated input for recording a brawl between two clubs named by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AddBrawlParams {
    pub first_club_name: String,
    pub second_club_name: String,
    pub date: NaiveDateTime,
    pub longitude: f64,
    pub latitude: f64,
}

impl AddBrawlParams {
    /// Builds params from the request body, parsing the textual date.
    ///
    /// # Returns
    /// - `Ok(AddBrawlParams)` - Date parsed successfully
    /// - `Err(AppError::BadRequest)` - Date does not match `YYYY.MM.DD HH:MM:SS`
    pub fn from_dto(dto: CreateBrawlDto) -> Result<Self, AppError> {
        Ok(Self {
            first_club_name: dto.first_club_name,
            second_club_name: dto.second_club_name,
            date: parse_brawl_date(&dto.date)?,
            longitude: dto.longitude,
            latitude: dto.latitude,
        })
    }
}

/// Validated patch of a brawl; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditBrawlParams {
    pub id: i32,
    pub first_club_name: Option<String>,
    pub second_club_name: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl EditBrawlParams {
    pub fn from_dto(dto: EditBrawlDto) -> Result<Self, AppError> {
        Ok(Self {
            id: dto.id,
            first_club_name: dto.first_club_name,
            second_club_name: dto.second_club_name,
            date: dto.date.as_deref().map(parse_brawl_date).transpose()?,
            longitude: dto.longitude,
            latitude: dto.latitude,
        })
    }
}

/// Repository input for inserting a brawl between two resolved clubs.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBrawlParams {
    pub first_club_id: i32,
    pub second_club_id: i32,
    pub date: NaiveDateTime,
    pub longitude: f64,
    pub latitude: f64,
}

/// Repository input for patching a brawl.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBrawlParams {
    pub id: i32,
    pub first_club_id: Option<i32>,
    pub second_club_id: Option<i32>,
    pub date: Option<NaiveDateTime>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}
