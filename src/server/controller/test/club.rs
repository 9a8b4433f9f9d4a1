use super::*;

/// Tests creating and reading a club over HTTP.
///
/// Expected: 201 with the created club, then 200 with identical fields
#[tokio::test]
async fn creates_and_reads_club() {
    let (_test, app) = setup().await;

    let (status, body) = post(
        &app,
        "/club",
        json!({ "name": "Wisła Kraków", "league": "Ekstraklasa", "logo_uri": "https://example.com/w.png" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = get(&app, &format!("/club/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Wisła Kraków"));
    assert_eq!(body["data"]["league"], json!("Ekstraklasa"));
    assert_eq!(body["data"]["logo_uri"], json!("https://example.com/w.png"));
    assert_eq!(body["data"]["chants"], json!([]));
}

/// Tests that unknown clubs map to 404 with the error envelope.
///
/// Expected: 404 with success = false and a message
#[tokio::test]
async fn unknown_club_is_not_found() {
    let (_test, app) = setup().await;

    let (status, body) = get(&app, "/club/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
    assert!(body.get("data").is_none());

    let (status, _) = post(&app, "/club/delete", json!({ "id": 404 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests editing with explicit nulls and omitted fields.
///
/// Expected: 200 with `true`; league cleared, city untouched
#[tokio::test]
async fn edit_distinguishes_null_from_omitted() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let club = factory::club::ClubFactory::new(db)
        .league("II liga")
        .city("Bytom")
        .build()
        .await
        .unwrap();

    let (status, body) = post(
        &app,
        "/club/edit",
        json!({ "id": club.id, "name": "Polonia Bytom", "league": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": true }));

    let (_, body) = get(&app, &format!("/club/{}", club.id)).await;
    assert_eq!(body["data"]["name"], json!("Polonia Bytom"));
    assert_eq!(body["data"]["league"], Value::Null);
    assert_eq!(body["data"]["city"], json!("Bytom"));
}

/// Tests listing clubs with skip and take.
///
/// Expected: Second page of two holds the third and fourth clubs
#[tokio::test]
async fn lists_clubs_with_paging() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(factory::create_club(db).await.unwrap().id);
    }

    let (status, body) = get(&app, "/club?skip=2&take=2").await;
    assert_eq!(status, StatusCode::OK);

    let page: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(page, vec![ids[2] as i64, ids[3] as i64]);
}

/// Tests the relation endpoints end to end.
///
/// Verifies creation, the duplicate conflict, self-relation rejection, and
/// deletion of a single direction.
///
/// Expected: 201, 409, 400, then 200 and only the mirror remains
#[tokio::test]
async fn manages_relations() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let a = factory::create_club(db).await.unwrap();
    let b = factory::create_club(db).await.unwrap();
    let relation = json!({ "first_club_id": a.id, "second_club_id": b.id, "relation": "rival" });

    let (status, _) = post(&app, "/club/relation/add", relation.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/club/relation/add", relation.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));

    let (status, _) = post(
        &app,
        "/club/relation/add",
        json!({ "first_club_id": a.id, "second_club_id": a.id, "relation": "alliance" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "/club/relation/delete", relation).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/club/{}", a.id)).await;
    assert_eq!(
        body["data"]["relations"],
        json!([{ "club_id": b.id, "club_name": b.name, "relation": "rival" }])
    );
    let (_, body) = get(&app, &format!("/club/{}", b.id)).await;
    assert_eq!(body["data"]["relations"], json!([]));
}

/// Tests an unknown relation kind in the request body.
///
/// Expected: 400 with the error envelope
#[tokio::test]
async fn rejects_unknown_relation_kind() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let a = factory::create_club(db).await.unwrap();
    let b = factory::create_club(db).await.unwrap();

    let (status, body) = post(
        &app,
        "/club/relation/add",
        json!({ "first_club_id": a.id, "second_club_id": b.id, "relation": "enemy" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
}

/// Tests request bodies that do not match the expected shape.
///
/// Verifies that a missing field, a wrongly typed field and invalid JSON are all
/// answered with the envelope instead of a plain-text rejection.
///
/// Expected: 400 with success = false and a message for each body
#[tokio::test]
async fn malformed_body_returns_envelope() {
    let (_test, app) = setup().await;

    for body in [
        json!({ "league": "x" }),
        json!({ "name": 7 }),
        json!("Wisła"),
    ] {
        let (status, response) = post(&app, "/club", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["success"], json!(false));
        assert!(response["error"].is_string());
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/club")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\":"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], json!(false));
}

/// Tests malformed path and query parameters.
///
/// Expected: 400 with the error envelope
#[tokio::test]
async fn malformed_path_and_query_return_envelope() {
    let (_test, app) = setup().await;

    for uri in ["/club/abc", "/club?skip=-1", "/club?include_deleted=maybe"] {
        let (status, body) = get(&app, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["success"], json!(false), "{}", uri);
    }
}

/// Tests pagination values beyond what the database can bind.
///
/// Verifies that an offset of `u64::MAX` yields an empty page and that an
/// oversized page size is capped instead of failing the request.
///
/// Expected: 200 for both; empty page, then the existing clubs
#[tokio::test]
async fn bounds_huge_pagination_values() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await.unwrap();

    let (status, body) = get(&app, "/club?skip=18446744073709551615&take=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (status, body) = get(&app, "/club?take=9223372036854775808").await;
    assert_eq!(status, StatusCode::OK);
    let clubs = body["data"].as_array().unwrap();
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0]["id"], json!(club.id));
}

/// Tests that a page never holds more than the maximum page size.
///
/// Expected: 100 of 101 clubs returned
#[tokio::test]
async fn caps_page_size() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    for _ in 0..101 {
        factory::create_club(db).await.unwrap();
    }

    let (status, body) = get(&app, "/club?take=500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 100);
}

/// Tests the chant endpoints.
///
/// Expected: 400 for an unknown club, 201 then 200 for a real one
#[tokio::test]
async fn manages_chants() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let (status, _) = post(
        &app,
        "/club/chant/add",
        json!({ "club_id": 999, "lyrics": "Ole ole" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let club = factory::create_club(db).await.unwrap();
    let (status, body) = post(
        &app,
        "/club/chant/add",
        json!({ "club_id": club.id, "lyrics": "Ole ole" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let chant_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = post(
        &app,
        "/club/chant/edit",
        json!({ "id": chant_id, "lyrics": "Ole ole ole" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/club/{}", club.id)).await;
    assert_eq!(body["data"]["chants"][0]["lyrics"], json!("Ole ole ole"));

    let (status, _) = post(&app, "/club/chant/delete", json!({ "id": chant_id })).await;
    assert_eq!(status, StatusCode::OK);
}
