use super::*;

/// Tests that an added brawl reads back identically.
///
/// Verifies that names, the textual date and coordinates survive add_brawl
/// followed by get_brawl, creating both clubs on the way.
///
/// Expected: Ok with "ClubA", "ClubB", "2020.01.01 12:00:00", 10.0, 20.0
#[tokio::test]
async fn added_brawl_reads_back_identically() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let service = BrawlService::new(db);
    let created = service
        .add_brawl(add_params("ClubA", "ClubB", "2020.01.01 12:00:00")?)
        .await?;

    let dto = service.get_brawl(created.brawl.id).await?.into_dto();

    assert_eq!(dto.first_club_name, "ClubA");
    assert_eq!(dto.second_club_name, "ClubB");
    assert_eq!(dto.date, "2020.01.01 12:00:00");
    assert_eq!(dto.longitude, 10.0);
    assert_eq!(dto.latitude, 20.0);

    assert_eq!(entity::prelude::Club::find().count(db).await?, 2);

    Ok(())
}

/// Tests that existing active clubs are reused by name.
///
/// Verifies that a soft-deleted club with the same name is not reused and a
/// fresh club is created instead.
///
/// Expected: Ok, first side reuses the active club, second side is new
#[tokio::test]
async fn reuses_active_clubs_by_name() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let lech = ClubFactory::new(db).name("Lech").build().await?;
    let deleted = ClubFactory::new(db)
        .name("Legia")
        .deleted(true)
        .build()
        .await?;

    let created = BrawlService::new(db)
        .add_brawl(add_params("Lech", "Legia", "2019.08.31 20:30:00")?)
        .await?;

    assert_eq!(created.brawl.first_club_id, lech.id);
    assert_ne!(created.brawl.second_club_id, deleted.id);
    assert_eq!(created.second_club_name, "Legia");
    assert_eq!(entity::prelude::Club::find().count(db).await?, 3);

    Ok(())
}

/// Tests adding a brawl of a club against itself.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_identical_names() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let result = BrawlService::new(db)
        .add_brawl(add_params("Arka", "Arka", "2020.01.01 12:00:00")?)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Club::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Brawl::find().count(db).await?, 0);

    Ok(())
}

/// Tests malformed brawl dates.
///
/// Expected: Err(AppError::BadRequest) for each malformed input
#[tokio::test]
async fn rejects_malformed_dates() -> Result<(), AppError> {
    for date in [
        "2020-01-01 12:00:00",
        "2020.1.1 12:00:00",
        "2020.01.01",
        "2020.13.01 12:00:00",
        "2020.02.30 12:00:00",
        "01.01.2020 12:00:00",
        "",
    ] {
        let result = add_params("ClubA", "ClubB", date);
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "accepted {:?}",
            date
        );
    }

    Ok(())
}

/// Tests that adding a brawl audits both the new clubs and the brawl.
///
/// Expected: Three audit entries, brawl last
#[tokio::test]
async fn audits_created_clubs_and_brawl() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let created = BrawlService::new(db)
        .add_brawl(add_params("Odra", "Śląsk", "2020.06.06 16:00:00")?)
        .await?;

    let messages: Vec<String> = entity::prelude::AuditLog::find()
        .all(db)
        .await?
        .into_iter()
        .map(|e| e.message)
        .collect();
    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages[2],
        format!(
            "Added brawl {} between clubs {} and {}",
            created.brawl.id, created.brawl.first_club_id, created.brawl.second_club_id
        )
    );

    Ok(())
}
