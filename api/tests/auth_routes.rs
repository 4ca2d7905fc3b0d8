mod common;

use axum::http::StatusCode;
use rostra_core::entity::users;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};

#[tokio::test]
async fn test_login_with_unknown_email() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();
    let server = common::server(db);

    let response = server
        .post("/auth/login")
        .json(&json!({ "email": "ghost@example.com", "password": "secret1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_register_validates_payload() {
    let server = common::server(common::empty_db());

    let response = server
        .post("/auth/register")
        .json(&json!({ "email": "not-an-email", "username": "jo", "password": "secret1" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Validation Error");

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "username"]);
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let server = common::server(common::empty_db());

    let response = server
        .post("/auth/register")
        .bytes("{ not json".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid JSON");
}
