//! End-to-end tests driving the full application router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use tower_sessions::cookie::Key;

use crate::{
    model::user::Role,
    server::{
        model::user::CreateUserParam, router, service::user::UserService, startup,
        state::AppState,
    },
};

mod hotel;

const PASSWORD: &str = "q1w2e3r4t5";

/// Application under test plus the context owning its in-memory database.
struct TestApp {
    app: Router,
    test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let store = test.session_store().await.unwrap();
        let db = test.db.clone().unwrap();

        let session = startup::session_layer(store, Key::from(&[7u8; 64]), 3600, false);
        let app = router::app(AppState::new(db), session);

        Self { app, test }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Creates a user with a real password hash so it can log in.
    async fn register(&self, email: &str, role: Role) -> i32 {
        let db = self.test.db.as_ref().unwrap();

        UserService::new(db)
            .create(CreateUserParam {
                email: email.to_string(),
                password: PASSWORD.to_string(),
                role,
            })
            .await
            .unwrap()
            .id
    }

    /// Logs in and returns the `Authorization=<value>` cookie pair.
    async fn login(&self, email: &str) -> String {
        let response = self
            .send(json_request(
                Method::POST,
                "/auth/login",
                None,
                json!({ "email": email, "password": PASSWORD }),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::OK);

        session_cookie(&response).expect("login sets the session cookie")
    }
}

fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with("Authorization="))
        .map(str::to_string)
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
