mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

/// Full register -> login -> whoami pass against a running server. Skips
/// when the binary is missing or the server has no database behind it.
#[tokio::test]
async fn register_login_whoami() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: server binary not built");
        return Ok(());
    };
    let client = reqwest::Client::new();

    let health = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;
    if health.status() != StatusCode::OK {
        eprintln!("skipping: server database unavailable");
        return Ok(());
    }

    // Random address so reruns never collide with earlier registrations.
    let email = format!("coach-{}@example.com", Uuid::new_v4().simple());

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": email, "name": "Coach", "password": "longenough" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert!(body["data"]["token"].is_string());
    // password_hash never serializes
    assert!(body["data"]["user"].get("password_hash").is_none());

    // Same address again conflicts.
    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": email, "name": "Coach", "password": "longenough" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Wrong password gets the generic rejection.
    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": email, "password": "wrong-password" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": email, "password": "longenough" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["email"], email);

    // No token, no identity.
    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn register_validates_input() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: server binary not built");
        return Ok(());
    };
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": "not-an-email", "name": "", "password": "short" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["email"].is_string());
    assert!(body["field_errors"]["name"].is_string());
    assert!(body["field_errors"]["password"].is_string());
    Ok(())
}
