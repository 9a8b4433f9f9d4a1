//! Club relation data repository.
//!
//! Relations are directed rows keyed by `(first_club_id, second_club_id, kind)`.
//! The service layer always creates them in mirrored pairs; each direction is then
//! deleted independently.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::club::ClubRelationKey;

pub struct ClubRelationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubRelationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a relation and its mirror in a single transaction.
    ///
    /// Either both `first -> second` and `second -> first` rows are stored or neither is.
    ///
    /// # Arguments
    /// - `key` - Forward direction of the relation
    ///
    /// # Returns
    /// - `Ok(())` - Both rows inserted
    /// - `Err(DbErr)` - Database error; a unique-constraint violation means one of
    ///   the directions already existed
    pub async fn create_pair(&self, key: ClubRelationKey) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        for edge in [key, key.reversed()] {
            let inserted = entity::club_relation::ActiveModel {
                first_club_id: ActiveValue::Set(edge.first_club_id),
                second_club_id: ActiveValue::Set(edge.second_club_id),
                kind: ActiveValue::Set(edge.kind.as_str().to_string()),
            }
            .insert(&txn)
            .await;

            if let Err(err) = inserted {
                tracing::debug!(error = %err, "Relation insert failed, rolling back");
                txn.rollback().await?;
                return Err(err);
            }
        }

        txn.commit().await?;

        Ok(())
    }

    /// Checks whether the exact directed relation exists.
    pub async fn exists(&self, key: ClubRelationKey) -> Result<bool, DbErr> {
        let count = entity::prelude::ClubRelation::find()
            .filter(entity::club_relation::Column::FirstClubId.eq(key.first_club_id))
            .filter(entity::club_relation::Column::SecondClubId.eq(key.second_club_id))
            .filter(entity::club_relation::Column::Kind.eq(key.kind.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a single directed relation row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that key
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, key: ClubRelationKey) -> Result<bool, DbErr> {
        let result = entity::prelude::ClubRelation::delete_many()
            .filter(entity::club_relation::Column::FirstClubId.eq(key.first_club_id))
            .filter(entity::club_relation::Column::SecondClubId.eq(key.second_club_id))
            .filter(entity::club_relation::Column::Kind.eq(key.kind.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds the first outgoing relation of a club.
    ///
    /// Relations are ordered by `second_club_id`, then by kind.
    ///
    /// # Returns
    /// - `Ok(Some(ClubRelationKey))` - Key of the first outgoing relation
    /// - `Ok(None)` - The club has no outgoing relations
    /// - `Err(DbErr)` - Database error, or a stored kind that cannot be parsed
    pub async fn get_first_outgoing(
        &self,
        club_id: i32,
    ) -> Result<Option<ClubRelationKey>, DbErr> {
        let entity = entity::prelude::ClubRelation::find()
            .filter(entity::club_relation::Column::FirstClubId.eq(club_id))
            .order_by_asc(entity::club_relation::Column::SecondClubId)
            .order_by_asc(entity::club_relation::Column::Kind)
            .one(self.db)
            .await?;

        entity.map(ClubRelationKey::from_entity).transpose()
    }

    /// Gets the relations pointing at any of the given clubs.
    ///
    /// For each returned key, `second_club_id` is the club being viewed and
    /// `first_club_id` is the counterpart. Ordered by viewed club, counterpart,
    /// then kind.
    pub async fn get_incoming(&self, club_ids: Vec<i32>) -> Result<Vec<ClubRelationKey>, DbErr> {
        if club_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ClubRelation::find()
            .filter(entity::club_relation::Column::SecondClubId.is_in(club_ids))
            .order_by_asc(entity::club_relation::Column::SecondClubId)
            .order_by_asc(entity::club_relation::Column::FirstClubId)
            .order_by_asc(entity::club_relation::Column::Kind)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(ClubRelationKey::from_entity)
            .collect()
    }
}

#[cfg(test)]
mod test;
