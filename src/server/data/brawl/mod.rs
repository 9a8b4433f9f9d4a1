//! Brawl data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::brawl::{Brawl, CreateBrawlParams, UpdateBrawlParams};

pub struct BrawlRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrawlRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBrawlParams) -> Result<Brawl, DbErr> {
        let entity = entity::brawl::ActiveModel {
            first_club_id: ActiveValue::Set(params.first_club_id),
            second_club_id: ActiveValue::Set(params.second_club_id),
            date: ActiveValue::Set(params.date),
            longitude: ActiveValue::Set(params.longitude),
            latitude: ActiveValue::Set(params.latitude),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Brawl::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Brawl>, DbErr> {
        let entity = entity::prelude::Brawl::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Brawl::from_entity))
    }

    /// Gets a page of brawls ordered by id ascending.
    pub async fn get_paginated(&self, skip: u64, take: u64) -> Result<Vec<Brawl>, DbErr> {
        let entities = entity::prelude::Brawl::find()
            .order_by_asc(entity::brawl::Column::Id)
            .offset(skip)
            .limit(take)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Brawl::from_entity).collect())
    }

    /// Applies a partial update to a brawl.
    ///
    /// # Returns
    /// - `Ok(Brawl)` - The updated brawl
    /// - `Err(DbErr::RecordNotFound)` - No brawl with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateBrawlParams) -> Result<Brawl, DbErr> {
        let brawl = entity::prelude::Brawl::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Brawl with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::brawl::ActiveModel = brawl.into();
        if let Some(first_club_id) = params.first_club_id {
            active_model.first_club_id = ActiveValue::Set(first_club_id);
        }
        if let Some(second_club_id) = params.second_club_id {
            active_model.second_club_id = ActiveValue::Set(second_club_id);
        }
        if let Some(date) = params.date {
            active_model.date = ActiveValue::Set(date);
        }
        if let Some(longitude) = params.longitude {
            active_model.longitude = ActiveValue::Set(longitude);
        }
        if let Some(latitude) = params.latitude {
            active_model.latitude = ActiveValue::Set(latitude);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Brawl::from_entity(entity))
    }

    /// Deletes a brawl.
    ///
    /// # Returns
    /// - `Ok(true)` - Brawl deleted
    /// - `Ok(false)` - No brawl with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Brawl::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod test;
