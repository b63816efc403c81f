//! API integration tests

use std::net::SocketAddr;

use bookshelf_server::{api, repository::IdStrategy, AppConfig, AppState};
use reqwest::{header::LOCATION, Client, StatusCode};
use serde_json::{json, Value};

/// Start a server with its own freshly seeded store and return its base URL
async fn spawn_app(config: AppConfig) -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    let app = api::create_router(AppState::from_config(config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

async fn spawn_default() -> String {
    spawn_app(AppConfig::default()).await
}

#[tokio::test]
async fn test_hello_world() {
    let base = spawn_default().await;
    let response = Client::new()
        .get(format!("{}/", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Hello World!");
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_default().await;
    let response = Client::new()
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 3);
}

#[tokio::test]
async fn test_list_seeded_books() {
    let base = spawn_default().await;
    let response = Client::new()
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!([
            { "id": 1, "title": "1984", "author": "George Orwell" },
            { "id": 2, "title": "To Kill a Mockingbird", "author": "Harper Lee" },
            { "id": 3, "title": "The Great Gatsby", "author": "F. Scott Fitzgerald" }
        ])
    );
}

#[tokio::test]
async fn test_get_book() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client.get(format!("{}/books/2", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "To Kill a Mockingbird");

    let response = client.get(format!("{}/books/99", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_then_get() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "Dune", "author": "Frank Herbert" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[LOCATION], "/books/4");

    let created: Value = response.json().await.expect("Failed to parse response");
    let expected = json!({ "id": 4, "title": "Dune", "author": "Frank Herbert" });
    assert_eq!(created, expected);

    let response = client.get(format!("{}/books/4", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), expected);
}

#[tokio::test]
async fn test_create_blank_title_rejected() {
    let base = spawn_default().await;
    let client = Client::new();

    for payload in [
        json!({ "title": "", "author": "Frank Herbert" }),
        json!({ "title": "   ", "author": "" }),
        json!({ "author": "No Title" }),
    ] {
        let response = client
            .post(format!("{}/books", base))
            .json(&payload)
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "title": ["Title is required."] }));
    }

    let books: Value = client
        .get(format!("{}/books", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(books.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_with_null_fields() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": null, "author": "X" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "title": ["Title is required."] }));

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "Dune", "author": null }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "id": 4, "title": "Dune", "author": "" }));
}

#[tokio::test]
async fn test_create_with_empty_author() {
    let base = spawn_default().await;
    let response = Client::new()
        .post(format!("{}/books", base))
        .json(&json!({ "title": "Beowulf", "author": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_update_existing_book() {
    let base = spawn_default().await;
    let client = Client::new();
    let payload = json!({ "id": 3, "title": "A", "author": "B" });

    let response = client
        .put(format!("{}/books/3", base))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), payload);

    let book: Value = client
        .get(format!("{}/books/3", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(book, payload);
}

#[tokio::test]
async fn test_update_missing_book_echoes_body() {
    let base = spawn_default().await;
    let client = Client::new();
    let payload = json!({ "id": 42, "title": "Ghost", "author": "Nobody" });

    let response = client
        .put(format!("{}/books/42", base))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), payload);

    let response = client.get(format!("{}/books/42", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_selects_record_by_body_id() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/1", base))
        .json(&json!({ "id": 2, "title": "Go Set a Watchman", "author": "Harper Lee" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let first: Value = client
        .get(format!("{}/books/1", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get(format!("{}/books/2", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["title"], "1984");
    assert_eq!(second["title"], "Go Set a Watchman");
}

#[tokio::test]
async fn test_delete_then_get() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client.delete(format!("{}/books/1", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), Value::Null);

    let response = client.get(format!("{}/books/1", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again is still a success
    let response = client.delete(format!("{}/books/1", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let base = spawn_default().await;
    let client = Client::new();

    client.delete(format!("{}/books/3", base)).send().await.unwrap();
    let created: Value = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "Dune", "author": "Frank Herbert" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"], 4);
}

#[tokio::test]
async fn test_count_strategy_reuses_ids() {
    let mut config = AppConfig::default();
    config.store.id_strategy = IdStrategy::Count;
    let base = spawn_app(config).await;
    let client = Client::new();

    client.delete(format!("{}/books/3", base)).send().await.unwrap();
    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "Dune", "author": "Frank Herbert" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()[LOCATION], "/books/3");
}

#[tokio::test]
async fn test_unseeded_store_starts_empty() {
    let mut config = AppConfig::default();
    config.store.seed = false;
    let base = spawn_app(config).await;

    let books: Value = Client::new()
        .get(format!("{}/books", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(books, json!([]));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let base = spawn_default().await;
    let response = Client::new()
        .get(format!("{}/api-docs/openapi.json", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: Value = response.json().await.unwrap();
    assert!(doc["paths"]["/books/{id}"].is_object());
}
