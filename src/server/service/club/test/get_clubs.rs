use super::*;

/// Tests paging over four clubs.
///
/// Verifies that pages (0,2) and (2,2) are disjoint, cover all four clubs and
/// follow id order, with each club's own chants attached.
///
/// Expected: Ok with two pages of two clubs each
#[tokio::test]
async fn pages_cover_all_clubs_in_id_order() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..4 {
        let club = factory::create_club(db).await?;
        factory::create_chant(db, club.id).await?;
        ids.push(club.id);
    }

    let service = ClubService::new(db);
    let first = service
        .get_clubs(GetClubsParams {
            skip: 0,
            take: 2,
            include_deleted: false,
        })
        .await?;
    let second = service
        .get_clubs(GetClubsParams {
            skip: 2,
            take: 2,
            include_deleted: false,
        })
        .await?;

    let mut seen: Vec<i32> = first.iter().map(|c| c.club.id).collect();
    assert_eq!(seen, ids[0..2].to_vec());
    seen.extend(second.iter().map(|c| c.club.id));
    assert_eq!(seen, ids);

    for details in first.iter().chain(second.iter()) {
        assert_eq!(details.chants.len(), 1);
        assert_eq!(details.chants[0].club_id, details.club.id);
    }

    Ok(())
}

/// Tests listing with soft-deleted clubs included.
///
/// Expected: Deleted club only present when include_deleted is set
#[tokio::test]
async fn includes_deleted_on_request() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    factory::create_club(db).await?;
    ClubFactory::new(db).deleted(true).build().await?;

    let service = ClubService::new(db);
    let active = service
        .get_clubs(GetClubsParams {
            skip: 0,
            take: 10,
            include_deleted: false,
        })
        .await?;
    let all = service
        .get_clubs(GetClubsParams {
            skip: 0,
            take: 10,
            include_deleted: true,
        })
        .await?;

    assert_eq!(active.len(), 1);
    assert_eq!(all.len(), 2);

    Ok(())
}
