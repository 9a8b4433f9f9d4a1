//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::club::ClubFactory;
///
/// let club = ClubFactory::new(&db)
///     .name("Wisła Kraków")
///     .league("Ekstraklasa")
///     .deleted(true)
///     .build()
///     .await?;
/// ```
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    league: Option<String>,
    logo_uri: Option<String>,
    city: Option<String>,
    longitude: Option<f64>,
    latitude: Option<f64>,
    is_deleted: bool,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Club {id}"` where id is auto-incremented
    /// - league: `"Test League"`
    /// - logo_uri, city, longitude, latitude: `None`
    /// - is_deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Club {}", id),
            league: Some("Test League".to_string()),
            logo_uri: None,
            city: None,
            longitude: None,
            latitude: None,
            is_deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn league(mut self, league: impl Into<String>) -> Self {
        self.league = Some(league.into());
        self
    }

    pub fn logo_uri(mut self, logo_uri: impl Into<String>) -> Self {
        self.logo_uri = Some(logo_uri.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets both coordinates of the club's home ground.
    pub fn location(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = Some(longitude);
        self.latitude = Some(latitude);
        self
    }

    /// Marks the club as soft-deleted.
    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the club entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::club::Model)` - Created club entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            league: ActiveValue::Set(self.league),
            logo_uri: ActiveValue::Set(self.logo_uri),
            city: ActiveValue::Set(self.city),
            longitude: ActiveValue::Set(self.longitude),
            latitude: ActiveValue::Set(self.latitude),
            is_deleted: ActiveValue::Set(self.is_deleted),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active club with default values.
///
/// Shorthand for `ClubFactory::new(db).build().await`.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_club_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Club).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let club = create_club(db).await?;

        assert!(club.id > 0);
        assert!(club.name.starts_with("Club "));
        assert!(!club.is_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn creates_club_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Club).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let club = ClubFactory::new(db)
            .name("Lech Poznań")
            .city("Poznań")
            .location(16.9, 52.4)
            .deleted(true)
            .build()
            .await?;

        assert_eq!(club.name, "Lech Poznań");
        assert_eq!(club.city.as_deref(), Some("Poznań"));
        assert_eq!(club.longitude, Some(16.9));
        assert!(club.is_deleted);

        Ok(())
    }
}
