use super::*;

/// Tests deleting a brawl and deleting it again.
///
/// Expected: Ok(true) the first time, Ok(false) afterwards
#[tokio::test]
async fn deletes_brawl_once() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_club(db).await?;
    let second = factory::create_club(db).await?;
    let brawl = factory::create_brawl(db, first.id, second.id).await?;

    let repo = BrawlRepository::new(db);

    assert!(repo.delete(brawl.id).await?);
    assert!(repo.get_by_id(brawl.id).await?.is_none());
    assert!(!repo.delete(brawl.id).await?);

    Ok(())
}
