use super::*;

/// Tests loading incoming relations for several clubs.
///
/// Verifies that only rows whose second club is requested are returned, in
/// (second club, first club, kind) order.
///
/// Expected: Ok(Vec) of incoming keys for A and B
#[tokio::test]
async fn loads_incoming_relations() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let a = factory::create_club(db).await?;
    let b = factory::create_club(db).await?;
    let c = factory::create_club(db).await?;

    factory::create_relation_pair(db, a.id, b.id, "rival").await?;
    factory::create_relation(db, c.id, a.id, "alliance").await?;
    factory::create_relation(db, a.id, c.id, "friendship").await?;

    let repo = ClubRelationRepository::new(db);
    let incoming = repo.get_incoming(vec![a.id, b.id]).await?;

    assert_eq!(
        incoming,
        vec![
            key(b.id, a.id, RelationKind::Rival),
            key(c.id, a.id, RelationKind::Alliance),
            key(a.id, b.id, RelationKind::Rival),
        ]
    );

    Ok(())
}
