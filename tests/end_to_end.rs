//! The whole stack over real TCP: listener, middleware, dispatch, service,
//! SQLite store and templates.

use chrono::Utc;
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_index_reflects_store_contents() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::empty_store(&dir).await;
    let server = common::start_server(store.clone()).await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(!body.contains("<tr class=\"item\">"));

    store
        .insert("Desk lamp", "Warm light for late reading", Utc::now())
        .await
        .unwrap();

    let response = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert_eq!(body.matches("<tr class=\"item\">").count(), 1);
    assert!(body.contains("Desk lamp"));
    assert!(body.contains("Warm light for late reading"));

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_item_page_and_errors_over_tcp() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::empty_store(&dir).await;
    let id = store
        .insert("Kettle", "Boils water", Utc::now())
        .await
        .unwrap();
    let server = common::start_server(store).await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url(&format!("/items/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Boils water"));

    let response = client.put(server.url("/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()["allow"], "GET");

    let response = client.get(server.url("/missing")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Not Found\n");

    drop(client);
    server.stop().await;
}
