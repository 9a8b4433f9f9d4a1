//! Brawl factory for creating test brawl entities.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test brawls between two existing clubs.
pub struct BrawlFactory<'a> {
    db: &'a DatabaseConnection,
    first_club_id: i32,
    second_club_id: i32,
    date: NaiveDateTime,
    longitude: f64,
    latitude: f64,
}

impl<'a> BrawlFactory<'a> {
    /// Creates a new BrawlFactory for the given pair of clubs.
    ///
    /// Defaults:
    /// - date: `2020-01-01 12:00:00`
    /// - longitude: `19.94`, latitude: `50.06`
    pub fn new(db: &'a DatabaseConnection, first_club_id: i32, second_club_id: i32) -> Self {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap_or_default();

        Self {
            db,
            first_club_id,
            second_club_id,
            date,
            longitude: 19.94,
            latitude: 50.06,
        }
    }

    pub fn date(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }

    pub fn location(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    /// Builds and inserts the brawl entity into the database.
    pub async fn build(self) -> Result<entity::brawl::Model, DbErr> {
        entity::brawl::ActiveModel {
            id: ActiveValue::NotSet,
            first_club_id: ActiveValue::Set(self.first_club_id),
            second_club_id: ActiveValue::Set(self.second_club_id),
            date: ActiveValue::Set(self.date),
            longitude: ActiveValue::Set(self.longitude),
            latitude: ActiveValue::Set(self.latitude),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a brawl with default date and location between two clubs.
pub async fn create_brawl(
    db: &DatabaseConnection,
    first_club_id: i32,
    second_club_id: i32,
) -> Result<entity::brawl::Model, DbErr> {
    BrawlFactory::new(db, first_club_id, second_club_id)
        .build()
        .await
}
