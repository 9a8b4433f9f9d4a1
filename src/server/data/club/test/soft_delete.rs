use super::*;

/// Tests soft-deleting a club that owns chants.
///
/// Verifies that the row is kept with the deleted flag and that its chants
/// remain in storage.
///
/// Expected: Ok(true), club flagged, chant still present
#[tokio::test]
async fn soft_deletes_and_keeps_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .with_table(entity::prelude::Chant)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let chant = factory::create_chant(db, club.id).await?;

    let repo = ClubRepository::new(db);
    assert!(repo.soft_delete(club.id).await?);

    let stored = entity::prelude::Club::find_by_id(club.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_deleted);

    let stored_chant = entity::prelude::Chant::find_by_id(chant.id).one(db).await?;
    assert!(stored_chant.is_some());

    Ok(())
}

/// Tests soft-deleting an unknown or already deleted club.
///
/// Expected: Ok(false) in both cases
#[tokio::test]
async fn reports_missing_or_already_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ClubFactory::new(db).deleted(true).build().await?;

    let repo = ClubRepository::new(db);

    assert!(!repo.soft_delete(999).await?);
    assert!(!repo.soft_delete(deleted.id).await?);

    Ok(())
}
