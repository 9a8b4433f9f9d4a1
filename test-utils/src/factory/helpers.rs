//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates both directions of a relation between two clubs.
///
/// # Arguments
/// - `db` - Database connection
/// - `first_club_id` - Club on the first side of the forward edge
/// - `second_club_id` - Club on the second side of the forward edge
/// - `kind` - Relation kind as stored (e.g. `"rival"`)
///
/// # Returns
/// - `Ok((forward, reverse))` - Both inserted relation rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_relation_pair(
    db: &DatabaseConnection,
    first_club_id: i32,
    second_club_id: i32,
    kind: &str,
) -> Result<
    (
        entity::club_relation::Model,
        entity::club_relation::Model,
    ),
    DbErr,
> {
    let forward =
        crate::factory::club_relation::create_relation(db, first_club_id, second_club_id, kind)
            .await?;
    let reverse =
        crate::factory::club_relation::create_relation(db, second_club_id, first_club_id, kind)
            .await?;

    Ok((forward, reverse))
}
