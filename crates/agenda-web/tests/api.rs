use agenda_core::rules::{MSG_CONTACT_METHOD_REQUIRED, MSG_NAME_REQUIRED};
use agenda_store::Store;
use agenda_web::router::build_router;
use agenda_web::state::AppState;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    build_router(AppState::new(store))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_app();
    let response = app.oneshot(get_request("/health")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_then_fetch_roundtrip() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/contacts",
            json!({ "name": "Ana", "phone": "(11) 91234-5678" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["data"]["name"], "Ana");
    assert_eq!(created["data"]["surname"], "");
    assert_eq!(created["data"]["phone"], "(11) 91234-5678");

    let id = created["data"]["id"].as_str().expect("id").to_string();
    let response = app
        .clone()
        .oneshot(get_request(&format!("/contacts/{id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["data"], created["data"]);

    let response = app
        .oneshot(get_request("/contacts"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response).await;
    assert_eq!(listed["data"].as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn create_rejects_invalid_payload_with_message_list() {
    let app = test_app();
    let response = app
        .oneshot(json_request("POST", "/contacts", json!({ "name": "" })))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    let errors: Vec<String> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|value| value.as_str().expect("message").to_string())
        .collect();
    assert_eq!(
        errors,
        vec![
            MSG_NAME_REQUIRED.to_string(),
            MSG_CONTACT_METHOD_REQUIRED.to_string(),
        ]
    );
}

#[tokio::test]
async fn malformed_and_unknown_ids_both_answer_404() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get_request("/contacts/not-a-uuid"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/contacts/not-a-uuid",
            json!({ "name": "Ana", "email": "ana@example.com" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/contacts/not-a-uuid")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let unknown = agenda_core::ContactId::new();
    let response = app
        .clone()
        .oneshot(get_request(&format!("/contacts/{unknown}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/contacts/{unknown}"),
            json!({ "name": "Ana", "email": "ana@example.com" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/contacts/{unknown}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_fields_in_place() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/contacts",
            json!({ "name": "Ana", "email": "ana@example.com" }),
        ))
        .await
        .expect("response");
    let created = json_body(response).await;
    let id = created["data"]["id"].as_str().expect("id").to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/contacts/{id}"),
            json!({ "name": "Ana Maria", "phone": "1234567" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["data"]["name"], "Ana Maria");
    assert_eq!(updated["data"]["email"], "");
    assert_eq!(updated["data"]["phone"], "1234567");
    assert_eq!(updated["data"]["id"], created["data"]["id"]);
}

#[tokio::test]
async fn delete_returns_the_removed_record() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/contacts",
            json!({ "name": "Ana", "email": "ana@example.com" }),
        ))
        .await
        .expect("response");
    let created = json_body(response).await;
    let id = created["data"]["id"].as_str().expect("id").to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/contacts/{id}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = json_body(response).await;
    assert_eq!(deleted["data"], created["data"]);

    let response = app
        .oneshot(get_request(&format!("/contacts/{id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_orders_newest_first() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    for (name, created_at) in [("First", 1_000), ("Second", 2_000), ("Third", 3_000)] {
        store.contacts().create(
            created_at,
            agenda_store::repo::ContactNew {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                ..Default::default()
            },
        )
        .expect("create");
    }
    let app = build_router(AppState::new(store));

    let response = app
        .oneshot(get_request("/contacts"))
        .await
        .expect("response");
    let body = json_body(response).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|contact| contact["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn auth_stubs_answer_not_implemented() {
    let app = test_app();
    for uri in ["/auth/login", "/auth/register"] {
        let response = app
            .clone()
            .oneshot(json_request("POST", uri, json!({})))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let body = json_body(response).await;
        assert_eq!(body["code"], "NOT_IMPLEMENTED");
    }
}
