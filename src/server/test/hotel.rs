use super::*;

fn hotel_body(name: &str) -> Value {
    json!({
        "name": name,
        "location": "Muscat",
        "description": "Beachfront",
        "picture_list": "pool.jpg"
    })
}

/// Tests admins create hotels and duplicate names are refused.
///
/// Expected: 201 for the first hotel, 409 for the duplicate
#[tokio::test]
async fn admin_creates_hotel_once_per_name() {
    let app = TestApp::new().await;
    app.register("admin@example.com", Role::Admin).await;
    let cookie = app.login("admin@example.com").await;

    let response = app
        .send(json_request(
            Method::POST,
            "/hotel",
            Some(&cookie),
            hotel_body("Sea Breeze"),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "created");
    assert_eq!(body["data"]["name"], "Sea Breeze");
    assert!(body["data"]["id"].as_i64().is_some());

    let response = app
        .send(json_request(
            Method::POST,
            "/hotel",
            Some(&cookie),
            hotel_body("Sea Breeze"),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["message"],
        "This name Sea Breeze already exists"
    );
}

/// Tests hotel writes are closed to regular users and anonymous callers.
///
/// Expected: 403 for a regular user, 401 without a session
#[tokio::test]
async fn hotel_writes_require_admin() {
    let app = TestApp::new().await;
    app.register("guest@example.com", Role::User).await;
    let cookie = app.login("guest@example.com").await;

    let response = app
        .send(json_request(
            Method::POST,
            "/hotel",
            Some(&cookie),
            hotel_body("Sea Breeze"),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .send(json_request(
            Method::POST,
            "/hotel",
            None,
            hotel_body("Sea Breeze"),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests the public hotel reads, including a missing id.
///
/// Expected: 200 for list and existing hotel, 409 for a missing one
#[tokio::test]
async fn reads_hotels_without_session() {
    let app = TestApp::new().await;
    let hotel = test_utils::factory::create_hotel(app.test.db.as_ref().unwrap())
        .await
        .unwrap();

    let response = app.send(empty_request(Method::GET, "/hotel", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"][0]["name"], hotel.name);

    let response = app
        .send(empty_request(
            Method::GET,
            &format!("/hotel/{}", hotel.id),
            None,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "findOne");

    let response = app
        .send(empty_request(Method::GET, "/hotel/4040", None))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["message"], "Hotel doesn't exist");
}

/// Tests an admin renaming, then deleting, a hotel.
///
/// Expected: 200 "updated" then 200 "deleted"
#[tokio::test]
async fn admin_updates_and_deletes_hotel() {
    let app = TestApp::new().await;
    app.register("admin@example.com", Role::Admin).await;
    let cookie = app.login("admin@example.com").await;
    let hotel = test_utils::factory::create_hotel(app.test.db.as_ref().unwrap())
        .await
        .unwrap();
    let uri = format!("/hotel/{}", hotel.id);

    let response = app
        .send(json_request(
            Method::PUT,
            &uri,
            Some(&cookie),
            json!({ "name": "Renamed" }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Renamed");
    assert_eq!(body["data"]["location"], hotel.location);

    let response = app
        .send(empty_request(Method::DELETE, &uri, Some(&cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "deleted");
}

/// Tests methods a path does not serve skip validation and auth.
///
/// Expected: 405 for every unrouted method, with or without a body
#[tokio::test]
async fn unsupported_method_is_not_allowed() {
    let app = TestApp::new().await;

    for uri in ["/hotel", "/hotel/1", "/users/1", "/booking/1", "/auth/login"] {
        let response = app
            .send(json_request(Method::PATCH, uri, None, json!({})))
            .await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
    }

    let response = app
        .send(empty_request(Method::GET, "/auth/logout", None))
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
