//! Member data repository.
//!
//! A member supports at most one club at a time through the nullable `club_id`
//! column; the members of a club are its fans.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    club::Fan,
    member::{CreateMemberParams, Member},
};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            name: ActiveValue::Set(params.name),
            club_id: ActiveValue::Set(params.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Moves a member to another club, or out of any club with `None`.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The updated member
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_club(&self, id: i32, club_id: Option<i32>) -> Result<Option<Member>, DbErr> {
        let Some(member) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::member::ActiveModel = member.into();
        active_model.club_id = ActiveValue::Set(club_id);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Member::from_entity(entity)))
    }

    /// Gets the fans of every club in `club_ids` as `(club_id, fan)` pairs, ordered
    /// by member id.
    pub async fn get_fans_by_club_ids(&self, club_ids: Vec<i32>) -> Result<Vec<(i32, Fan)>, DbErr> {
        if club_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::ClubId.is_in(club_ids))
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter_map(|e| e.club_id.map(|club_id| (club_id, Fan::from_entity(e))))
            .collect())
    }
}

#[cfg(test)]
mod test;
