//! Chant data repository.
//!
//! Chants are owned by a club and removed with hard deletes.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::club::{Chant, CreateChantParams};

pub struct ChantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a chant for a club.
    ///
    /// The caller is responsible for checking that the club is active; the foreign
    /// key only guarantees the club row exists.
    ///
    /// # Returns
    /// - `Ok(Chant)` - The created chant
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an
    ///   unknown club
    pub async fn create(&self, params: CreateChantParams) -> Result<Chant, DbErr> {
        let entity = entity::chant::ActiveModel {
            club_id: ActiveValue::Set(params.club_id),
            lyrics: ActiveValue::Set(params.lyrics),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Chant::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Chant>, DbErr> {
        let entity = entity::prelude::Chant::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Chant::from_entity))
    }

    /// Gets the chants of every club in `club_ids`, ordered by id.
    pub async fn get_by_club_ids(&self, club_ids: Vec<i32>) -> Result<Vec<Chant>, DbErr> {
        if club_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Chant::find()
            .filter(entity::chant::Column::ClubId.is_in(club_ids))
            .order_by_asc(entity::chant::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Chant::from_entity).collect())
    }

    /// Overwrites the lyrics of a chant.
    ///
    /// # Returns
    /// - `Ok(Some(Chant))` - The updated chant
    /// - `Ok(None)` - No chant with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_lyrics(&self, id: i32, lyrics: String) -> Result<Option<Chant>, DbErr> {
        let Some(chant) = entity::prelude::Chant::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::chant::ActiveModel = chant.into();
        active_model.lyrics = ActiveValue::Set(lyrics);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Chant::from_entity(entity)))
    }

    /// Deletes a chant.
    ///
    /// # Returns
    /// - `Ok(true)` - Chant deleted
    /// - `Ok(false)` - No chant with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Chant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod test;
