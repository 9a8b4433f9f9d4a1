//! Chant factory for creating test chant entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test chants belonging to a club.
pub struct ChantFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    lyrics: String,
}

impl<'a> ChantFactory<'a> {
    /// Creates a new ChantFactory for the given club.
    ///
    /// Defaults:
    /// - lyrics: `"Chant {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            lyrics: format!("Chant {}", id),
        }
    }

    pub fn lyrics(mut self, lyrics: impl Into<String>) -> Self {
        self.lyrics = lyrics.into();
        self
    }

    /// Builds and inserts the chant entity into the database.
    pub async fn build(self) -> Result<entity::chant::Model, DbErr> {
        entity::chant::ActiveModel {
            id: ActiveValue::NotSet,
            club_id: ActiveValue::Set(self.club_id),
            lyrics: ActiveValue::Set(self.lyrics),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chant with default lyrics for the specified club.
pub async fn create_chant(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::chant::Model, DbErr> {
    ChantFactory::new(db, club_id).build().await
}
