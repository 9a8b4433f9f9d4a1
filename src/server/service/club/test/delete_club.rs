use super::*;

/// Tests deleting an unknown club.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_club() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let result = ClubService::new(db).delete_club(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests soft-deleting a club with chants.
///
/// Verifies that the club disappears from get_clubs and get_club while its
/// chants stay in storage still referencing it.
///
/// Expected: Ok, club hidden from default reads, chant row kept
#[tokio::test]
async fn hides_club_and_keeps_chants() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_club(db).await?;
    let club = factory::create_club(db).await?;
    let chant = factory::create_chant(db, club.id).await?;

    let service = ClubService::new(db);
    service.delete_club(club.id).await?;

    let clubs = service
        .get_clubs(GetClubsParams {
            skip: 0,
            take: 10,
            include_deleted: false,
        })
        .await?;
    let ids: Vec<i32> = clubs.iter().map(|c| c.club.id).collect();
    assert_eq!(ids, vec![kept.id]);

    assert!(matches!(
        service.get_club(club.id, false).await,
        Err(AppError::NotFound(_))
    ));

    let stored_chant = entity::prelude::Chant::find_by_id(chant.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_chant.club_id, club.id);

    let audited = service.get_club(club.id, true).await?;
    assert!(audited.club.is_deleted);
    assert_eq!(audited.chants.len(), 1);

    Ok(())
}

/// Tests deleting a club twice.
///
/// Expected: Ok the first time, Err(AppError::NotFound) the second
#[tokio::test]
async fn fails_for_already_deleted_club() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let service = ClubService::new(db);
    service.delete_club(club.id).await?;

    assert!(matches!(
        service.delete_club(club.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(
        audit_messages(db).await,
        vec![format!("Deleted club {}", club.id)]
    );

    Ok(())
}
