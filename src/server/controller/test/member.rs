use super::*;

/// Tests registering a fan and moving them out of their club.
///
/// Expected: 201 with the club name, 200 on leave, then no club on read
#[tokio::test]
async fn registers_and_moves_member() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let club = factory::club::ClubFactory::new(db)
        .name("Lechia")
        .build()
        .await
        .unwrap();

    let (status, body) = post(
        &app,
        "/member",
        json!({ "name": "Bogdan", "club_id": club.id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["club_name"], json!("Lechia"));
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = post(&app, "/member/club", json!({ "id": id, "club_id": null })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, &format!("/member/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["club_id"], Value::Null);
}

/// Tests moving an unknown member.
///
/// Expected: 404
#[tokio::test]
async fn unknown_member_is_not_found() {
    let (_test, app) = setup().await;

    let (status, _) = post(&app, "/member/club", json!({ "id": 12, "club_id": null })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests a member id that is not a number.
///
/// Expected: 400 with the error envelope
#[tokio::test]
async fn non_numeric_id_returns_envelope() {
    let (_test, app) = setup().await;

    let (status, body) = get(&app, "/member/bogdan").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}
