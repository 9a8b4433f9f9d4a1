//! Club relation factory for inserting single directed relation rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts one directed relation row.
///
/// Only the given direction is created; use `helpers::create_relation_pair` for both.
///
/// # Arguments
/// - `db` - Database connection
/// - `first_club_id` - Owning side of the edge
/// - `second_club_id` - Target side of the edge
/// - `kind` - Relation kind as stored (e.g. `"rival"`)
///
/// # Returns
/// - `Ok(entity::club_relation::Model)` - Created relation row
/// - `Err(DbErr)` - Database error during insert (including duplicate key)
pub async fn create_relation(
    db: &DatabaseConnection,
    first_club_id: i32,
    second_club_id: i32,
    kind: &str,
) -> Result<entity::club_relation::Model, DbErr> {
    entity::club_relation::ActiveModel {
        first_club_id: ActiveValue::Set(first_club_id),
        second_club_id: ActiveValue::Set(second_club_id),
        kind: ActiveValue::Set(kind.to_string()),
    }
    .insert(db)
    .await
}
