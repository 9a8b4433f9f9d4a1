//! Club data repository for database operations.
//!
//! This module provides the `ClubRepository` for managing club records. Clubs are
//! never removed by the repository; deletion is a soft delete through the
//! `is_deleted` flag, and every read filters soft-deleted rows unless the caller
//! asks for them explicitly.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::club::{Club, CreateClubParams, GetClubsParams, UpdateClubParams};

/// Repository providing database operations for clubs.
pub struct ClubRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubRepository<'a> {
    /// Creates a new ClubRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ClubRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active club.
    ///
    /// Names are not required to be unique.
    ///
    /// # Arguments
    /// - `params` - Club fields
    ///
    /// # Returns
    /// - `Ok(Club)` - The created club with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateClubParams) -> Result<Club, DbErr> {
        let entity = entity::club::ActiveModel {
            name: ActiveValue::Set(params.name),
            league: ActiveValue::Set(params.league),
            logo_uri: ActiveValue::Set(params.logo_uri),
            city: ActiveValue::Set(params.city),
            longitude: ActiveValue::Set(params.longitude),
            latitude: ActiveValue::Set(params.latitude),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Club::from_entity(entity))
    }

    /// Gets a club by id.
    ///
    /// # Arguments
    /// - `id` - Club id
    /// - `include_deleted` - Whether a soft-deleted club may be returned
    ///
    /// # Returns
    /// - `Ok(Some(Club))` - Club found
    /// - `Ok(None)` - No club with that id, or it is soft-deleted and excluded
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32, include_deleted: bool) -> Result<Option<Club>, DbErr> {
        let mut query = entity::prelude::Club::find_by_id(id);
        if !include_deleted {
            query = query.filter(entity::club::Column::IsDeleted.eq(false));
        }

        let entity = query.one(self.db).await?;

        Ok(entity.map(Club::from_entity))
    }

    /// Checks whether an active club with the given id exists.
    pub async fn exists_active(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(id, false).await?.is_some())
    }

    /// Finds the active club with exactly the given name.
    ///
    /// When several active clubs share the name, the one with the lowest id wins.
    ///
    /// # Returns
    /// - `Ok(Some(Club))` - Matching club
    /// - `Ok(None)` - No active club has that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_by_name(&self, name: &str) -> Result<Option<Club>, DbErr> {
        let entity = entity::prelude::Club::find()
            .filter(entity::club::Column::Name.eq(name))
            .filter(entity::club::Column::IsDeleted.eq(false))
            .order_by_asc(entity::club::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Club::from_entity))
    }

    /// Gets a page of clubs ordered by id ascending.
    ///
    /// # Arguments
    /// - `params` - Offset, page size, and whether soft-deleted clubs are included
    ///
    /// # Returns
    /// - `Ok(Vec<Club>)` - Clubs on the requested page (empty past the end)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, params: GetClubsParams) -> Result<Vec<Club>, DbErr> {
        let mut query = entity::prelude::Club::find();
        if !params.include_deleted {
            query = query.filter(entity::club::Column::IsDeleted.eq(false));
        }

        let entities = query
            .order_by_asc(entity::club::Column::Id)
            .offset(params.skip)
            .limit(params.take)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Club::from_entity).collect())
    }

    /// Gets clubs by id, keyed by id.
    ///
    /// Ids with no matching club (or a soft-deleted one when excluded) are simply
    /// absent from the map.
    pub async fn get_by_ids(
        &self,
        ids: Vec<i32>,
        include_deleted: bool,
    ) -> Result<HashMap<i32, Club>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut query = entity::prelude::Club::find().filter(entity::club::Column::Id.is_in(ids));
        if !include_deleted {
            query = query.filter(entity::club::Column::IsDeleted.eq(false));
        }

        let entities = query.all(self.db).await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, Club::from_entity(e)))
            .collect())
    }

    /// Applies a partial update to a club.
    ///
    /// Only fields present in `params` are written. Soft-deleted clubs are not
    /// updated.
    ///
    /// # Returns
    /// - `Ok(Club)` - The updated club
    /// - `Err(DbErr::RecordNotFound)` - No active club with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateClubParams) -> Result<Club, DbErr> {
        let club = entity::prelude::Club::find_by_id(params.id)
            .filter(entity::club::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Club with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::club::ActiveModel = club.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(league) = params.league {
            active_model.league = ActiveValue::Set(league);
        }
        if let Some(logo_uri) = params.logo_uri {
            active_model.logo_uri = ActiveValue::Set(logo_uri);
        }
        if let Some(city) = params.city {
            active_model.city = ActiveValue::Set(city);
        }
        if let Some(longitude) = params.longitude {
            active_model.longitude = ActiveValue::Set(longitude);
        }
        if let Some(latitude) = params.latitude {
            active_model.latitude = ActiveValue::Set(latitude);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Club::from_entity(entity))
    }

    /// Marks an active club as deleted.
    ///
    /// Chants, relations, members and brawls referencing the club are left as they are.
    ///
    /// # Returns
    /// - `Ok(true)` - Club was active and is now soft-deleted
    /// - `Ok(false)` - No active club with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Club::update_many()
            .col_expr(
                entity::club::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::club::Column::Id.eq(id))
            .filter(entity::club::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod test;
