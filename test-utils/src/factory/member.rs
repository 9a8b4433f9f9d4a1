//! Member factory for creating test fan entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    club_id: Option<i32>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Member {id}"` where id is auto-incremented
    /// - club_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Member {}", id),
            club_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Makes the member a fan of the given club.
    pub fn club_id(mut self, club_id: i32) -> Self {
        self.club_id = Some(club_id);
        self
    }

    /// Builds and inserts the member entity into the database.
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            club_id: ActiveValue::Set(self.club_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member supporting the given club.
pub async fn create_member(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).club_id(club_id).build().await
}
