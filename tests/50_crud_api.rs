mod common;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

async fn server_with_db() -> Result<Option<(&'static common::TestServer, Client)>> {
    let Some(server) = common::ensure_server().await? else {
        eprintln!("skipping: server binary not built");
        return Ok(None);
    };
    let client = Client::new();
    let health = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;
    if health.status() != StatusCode::OK {
        eprintln!("skipping: server database unavailable");
        return Ok(None);
    }
    Ok(Some((server, client)))
}

async fn create(client: &Client, url: &str, payload: &Value) -> Result<Value> {
    let res = client.post(url).json(payload).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED, "create at {}", url);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    Ok(body["data"].clone())
}

/// The full lifecycle of one soft-deletable entity over HTTP: create,
/// conflict, list filters, patch, soft delete, restore, force delete.
#[tokio::test]
async fn division_lifecycle_over_http() -> Result<()> {
    let Some((server, client)) = server_with_db().await? else {
        return Ok(());
    };
    let base = format!("{}/api/divisions", server.base_url);

    // Random name so reruns against a shared database never collide.
    let name = format!("U10-{}", Uuid::new_v4().simple());
    let payload = json!({
        "name": name,
        "description": null,
        "players_count": 7,
        "max_players_on_roster": 10,
        "no_goalkeepers": false,
        "game_duration": 50
    });

    let division = create(&client, &base, &payload).await?;
    let id = division["id"].as_str().unwrap().to_string();

    // Same active name conflicts through the partial unique index.
    let res = client.post(&base).json(&payload).send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Unknown deleted filter is rejected.
    let res = client
        .get(format!("{}?deleted=bogus", base))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Partial update on the active row.
    let res = client
        .patch(format!("{}/{}", base, id))
        .json(&json!({ "description": "seven a side" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["description"], "seven a side");

    // Force delete before the tombstone is a 404, not a removal.
    let res = client
        .delete(format!("{}/{}/force", base, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Soft delete hides the row from plain lookups.
    let res = client.delete(format!("{}/{}", base, id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = client.get(format!("{}/{}", base, id)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Patching a soft-deleted row matches nothing.
    let res = client
        .patch(format!("{}/{}", base, id))
        .json(&json!({ "description": "x" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Still reachable with the include filter, tombstone set.
    let res = client
        .get(format!("{}/{}?deleted=include", base, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(!body["data"]["deleted_at"].is_null());

    // And listed by the only filter.
    let res = client.get(format!("{}?deleted=only", base)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    let listed = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|row| row["id"] == id.as_str());
    assert!(listed, "tombstoned division missing from ?deleted=only");

    // Restore brings it back to active queries.
    let res = client
        .post(format!("{}/{}/restore", base, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = client.get(format!("{}/{}", base, id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Two-step removal: tombstone again, then force delete for good.
    let res = client.delete(format!("{}/{}", base, id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = client
        .delete(format!("{}/{}/force", base, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = client
        .get(format!("{}/{}?deleted=include", base, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// The tombstone-free entity over HTTP: DELETE is physical and restore is
/// rejected outright.
#[tokio::test]
async fn player_preferences_delete_physically_over_http() -> Result<()> {
    let Some((server, client)) = server_with_db().await? else {
        return Ok(());
    };
    let api = &server.base_url;
    let suffix = Uuid::new_v4().simple().to_string();

    let division = create(
        &client,
        &format!("{}/api/divisions", api),
        &json!({
            "name": format!("Div-{}", suffix),
            "description": null,
            "players_count": 7,
            "max_players_on_roster": 10,
            "no_goalkeepers": false,
            "game_duration": 50
        }),
    )
    .await?;
    let league = create(
        &client,
        &format!("{}/api/leagues", api),
        &json!({
            "division_id": division["id"],
            "name": format!("League-{}", suffix),
            "description": null,
            "start_date": "2026-09-01",
            "end_date": "2026-12-01",
            "games_count": 10
        }),
    )
    .await?;
    let team = create(
        &client,
        &format!("{}/api/teams", api),
        &json!({
            "league_id": league["id"],
            "name": format!("Team-{}", suffix),
            "color": "red"
        }),
    )
    .await?;
    let player = create(
        &client,
        &format!("{}/api/players", api),
        &json!({
            "team_id": team["id"],
            "name": "Ada",
            "jersey_number": 1
        }),
    )
    .await?;
    let position = create(
        &client,
        &format!("{}/api/positions", api),
        &json!({
            "name": format!("Striker-{}", suffix),
            "description": null,
            "position_type": "ATTACK"
        }),
    )
    .await?;

    let base = format!("{}/api/player-preferences", api);
    let pref = create(
        &client,
        &base,
        &json!({
            "player_id": player["id"],
            "position_id": position["id"],
            "rank": 1
        }),
    )
    .await?;
    let id = pref["id"].as_str().unwrap().to_string();

    // No tombstone column: restore is an unsupported operation.
    let res = client
        .post(format!("{}/{}/restore", base, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // DELETE removes the row outright.
    let res = client.delete(format!("{}/{}", base, id)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = client
        .get(format!("{}/{}?deleted=include", base, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
