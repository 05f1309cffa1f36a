//! Integration tests for elevation enforcement on the plugin routes.

mod common;

use common::TestHost;

#[tokio::test]
async fn missing_token_rejected() {
    let (_host, addr) = TestHost::with_server_api_key("secret").await;

    let resp = reqwest::get(format!("http://{addr}/MediaSegmentsApi"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn wrong_token_forbidden() {
    let (_host, addr) = TestHost::with_server_api_key("secret").await;

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("http://{addr}/MediaSegmentsApi"))
        .header("Authorization", "Bearer not-the-key")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn elevated_token_allowed() {
    let (_host, addr) = TestHost::with_server_api_key("secret").await;

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("http://{addr}/MediaSegmentsApi"))
        .header("Authorization", "Bearer secret")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn every_route_requires_elevation() {
    let (host, addr) = TestHost::with_server_api_key("secret").await;
    let item = host.add_item("Guarded Movie");

    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/MediaSegmentsApi/{}", item.id))
        .query(&[("providerId", "Media Segments API")])
        .json(&serde_json::json!({"StartTicks": 0, "EndTicks": 10}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = client
        .delete(format!("http://{addr}/MediaSegmentsApi/{}", item.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    assert_eq!(host.segments.create_calls(), 0);
}

#[tokio::test]
async fn create_and_delete_with_elevated_token() {
    let (host, addr) = TestHost::with_server_api_key("secret").await;
    let item = host.add_item("Some Movie");

    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/MediaSegmentsApi/{}", item.id))
        .query(&[("providerId", "Media Segments API")])
        .header("Authorization", "Bearer secret")
        .json(&serde_json::json!({
            "StartTicks": 100,
            "EndTicks": 200,
            "Type": "Outro",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let created: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(created["ItemId"], item.id.to_string());
    assert_eq!(created["Type"], "Outro");

    let segment_id = created["Id"].as_str().unwrap();
    let resp = client
        .delete(format!("http://{addr}/MediaSegmentsApi/{segment_id}"))
        .header("Authorization", "Bearer secret")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(host.segments.is_empty());
}

#[tokio::test]
async fn open_policy_grants_anonymous_requests() {
    let (_host, addr) = TestHost::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/MediaSegmentsApi"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}
