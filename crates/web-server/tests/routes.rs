//! Router-level tests driven with `tower::ServiceExt::oneshot`.
//!
//! The router is built over a lazy pool pointing at an unreachable address,
//! so these tests exercise everything that happens before (or instead of) a
//! database round trip: validation rejections, path typing, the health
//! route, and the 5xx mapping when the store cannot be reached.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use configuration::DatabaseSettings;
use database::StudentRepository;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use web_server::{create_router, AppState};

/// The production router over a pool that can never reach a database.
fn unreachable_router() -> Router {
    // Port 1 is never listening locally, so the first checkout fails fast.
    let settings = DatabaseSettings {
        host: "127.0.0.1".to_string(),
        port: 1,
        username: "roster".to_string(),
        password: "roster".to_string(),
        database_name: "students_db".to_string(),
        max_connections: 1,
        acquire_timeout_secs: 1,
    };
    let pool = database::connect_lazy(&settings);
    create_router(AppState {
        students: StudentRepository::new(pool),
    })
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_route_answers_ok() {
    let response = unreachable_router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn post_with_empty_body_reports_every_missing_field() {
    // The pool is unreachable, so a 400 here also proves the rejected body
    // never reached the repository.
    let response = unreachable_router()
        .oneshot(json_request(Method::POST, "/students", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    for field in ["first_name", "last_name", "email", "phone_num"] {
        assert_eq!(
            body["errors"][field],
            json!(["Missing data for required field."]),
            "missing report for {field}"
        );
    }
}

#[tokio::test]
async fn post_with_client_supplied_id_is_rejected() {
    let body = json!({
        "id": 42,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@x.com",
        "phone_num": "555-0100",
    });

    let response = unreachable_router()
        .oneshot(json_request(Method::POST, "/students", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["errors"]["id"], json!(["Field is read-only."]));
}

#[tokio::test]
async fn put_with_invalid_body_is_rejected_before_lookup() {
    let body = json!({ "first_name": "Ada", "start_date": "yesterday" });

    let response = unreachable_router()
        .oneshot(json_request(Method::PUT, "/students/7", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["errors"]["start_date"], json!(["Not a valid date."]));
    assert_eq!(
        body["errors"]["email"],
        json!(["Missing data for required field."])
    );
}

#[tokio::test]
async fn non_numeric_path_id_is_a_client_error() {
    let response = unreachable_router()
        .oneshot(Request::get("/students/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreachable_database_surfaces_as_a_server_error() {
    // The defect fixed from the original system: a dead connection must
    // produce an explicit 5xx response, never a silent empty success.
    let response = unreachable_router()
        .oneshot(Request::get("/students").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_server_error());
    let body = json_body(response).await;
    assert!(body["error"].is_string());
}
