//! Integration tests for the store API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p marquee-admin)
//!
//! Run with: cargo test -p marquee-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use marquee_core::StoreSettings;
use marquee_integration_tests::{admin_base_url, api_client, unique_name};

/// Test helper: create a store and return its wire representation.
async fn create_test_store(client: &Client, name: &str) -> Value {
    let base_url = admin_base_url();
    let resp = client
        .post(format!("{base_url}/api/stores"))
        .json(&StoreSettings {
            name: name.to_string(),
        })
        .send()
        .await
        .expect("Failed to create test store");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse store response")
}

/// Test helper: delete a store, ignoring the outcome.
async fn delete_test_store(client: &Client, store_id: i64) {
    let base_url = admin_base_url();
    let _ = client
        .delete(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await;
}

fn id_of(body: &Value) -> i64 {
    body["id"].as_i64().expect("Response missing id")
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_store_create_and_get() {
    let client = api_client();
    let base_url = admin_base_url();

    let name = unique_name("store");
    let created = create_test_store(&client, &name).await;
    let store_id = id_of(&created);
    assert_eq!(created["name"], name.as_str());
    assert!(created["createdAt"].is_string());

    let resp = client
        .get(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to get store");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["name"], name.as_str());

    delete_test_store(&client, store_id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_store_create_empty_name_is_rejected() {
    let client = api_client();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/api/stores"))
        .json(&json!({"name": ""}))
        .send()
        .await
        .expect("Failed to post store");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(
        body["fields"],
        json!([{"field": "name", "message": "Required"}])
    );
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_store_list_includes_created_store() {
    let client = api_client();
    let base_url = admin_base_url();

    let created = create_test_store(&client, &unique_name("store")).await;
    let store_id = id_of(&created);

    let resp = client
        .get(format!("{base_url}/api/stores"))
        .send()
        .await
        .expect("Failed to list stores");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let stores = body.as_array().expect("Expected a JSON array");
    assert!(
        stores.iter().any(|s| s["id"] == created["id"]),
        "Created store missing from list"
    );

    delete_test_store(&client, store_id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_store_rename() {
    let client = api_client();
    let base_url = admin_base_url();

    let created = create_test_store(&client, &unique_name("store")).await;
    let store_id = id_of(&created);

    let new_name = unique_name("renamed");
    let resp = client
        .patch(format!("{base_url}/api/stores/{store_id}"))
        .json(&json!({"name": new_name}))
        .send()
        .await
        .expect("Failed to rename store");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], new_name.as_str());

    // The rename must be visible on a fresh read
    let resp = client
        .get(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to get store");
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], new_name.as_str());

    delete_test_store(&client, store_id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_store_update_missing_is_404() {
    let client = api_client();
    let base_url = admin_base_url();

    let resp = client
        .patch(format!("{base_url}/api/stores/999999999"))
        .json(&json!({"name": "Ghost"}))
        .send()
        .await
        .expect("Failed to patch store");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_store_delete() {
    let client = api_client();
    let base_url = admin_base_url();

    let created = create_test_store(&client, &unique_name("store")).await;
    let store_id = id_of(&created);

    let resp = client
        .delete(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to delete store");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to get store");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // A second delete finds nothing
    let resp = client
        .delete(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to delete store");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Delete Restriction Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_store_delete_with_billboards_conflicts() {
    let client = api_client();
    let base_url = admin_base_url();

    let created = create_test_store(&client, &unique_name("store")).await;
    let store_id = id_of(&created);

    let resp = client
        .post(format!("{base_url}/api/stores/{store_id}/billboards"))
        .json(&json!({
            "label": "Blocking billboard",
            "imageUrl": "https://cdn.example.com/block.png",
        }))
        .send()
        .await
        .expect("Failed to create billboard");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let billboard: Value = resp.json().await.expect("Failed to parse response");
    let billboard_id = id_of(&billboard);

    // The billboard blocks the store delete
    let resp = client
        .delete(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to attempt delete");
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());

    // The store survives a failed delete
    let resp = client
        .get(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to get store");
    assert_eq!(resp.status(), StatusCode::OK);

    // Removing the dependent billboard unblocks the delete
    let resp = client
        .delete(format!(
            "{base_url}/api/stores/{store_id}/billboards/{billboard_id}"
        ))
        .send()
        .await
        .expect("Failed to delete billboard");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .delete(format!("{base_url}/api/stores/{store_id}"))
        .send()
        .await
        .expect("Failed to delete store");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
