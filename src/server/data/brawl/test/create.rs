use super::*;

/// Tests recording a brawl between two clubs.
///
/// Expected: Ok(Brawl) with the given clubs, date and location
#[tokio::test]
async fn creates_brawl() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_club(db).await?;
    let second = factory::create_club(db).await?;

    let repo = BrawlRepository::new(db);
    let brawl = repo
        .create(CreateBrawlParams {
            first_club_id: first.id,
            second_club_id: second.id,
            date: date(2020, 1, 1, 12),
            longitude: 10.0,
            latitude: 20.0,
        })
        .await?;

    assert!(brawl.id > 0);
    assert_eq!(brawl.first_club_id, first.id);
    assert_eq!(brawl.second_club_id, second.id);
    assert_eq!(brawl.date, date(2020, 1, 1, 12));
    assert_eq!(brawl.longitude, 10.0);
    assert_eq!(brawl.latitude, 20.0);

    assert_eq!(repo.get_by_id(brawl.id).await?, Some(brawl));

    Ok(())
}
