#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use sqlx::postgres::PgPoolOptions;
use url::Url;
use uuid::Uuid;

use roster_api::config::{self, DatabaseConfig};
use roster_api::database::Database;

static SERVER: OnceLock<Option<TestServer>> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        let mut cmd = Command::new("target/debug/roster-api");
        cmd.env("PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server sees DATABASE_URL from .env
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            port,
            base_url,
            child,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Ready on any handled response; 503 means the server is up
                // with the database still unreachable.
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

/// Spawn (once) and return the shared server, or None when the binary is
/// missing so suites can skip instead of fail.
pub async fn ensure_server() -> Result<Option<&'static TestServer>> {
    let server = SERVER.get_or_init(|| TestServer::spawn().ok());
    match server {
        Some(s) => {
            s.wait_ready(Duration::from_secs(10)).await?;
            Ok(Some(s))
        }
        None => Ok(None),
    }
}

/// A throwaway database created for one test, migrated and dropped on
/// teardown. Returns None when Postgres is unreachable so tests skip.
pub struct TestDb {
    pub db: Database,
    admin_url: String,
    name: String,
}

pub async fn test_db() -> Option<TestDb> {
    let base_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| config::config().database.url.clone());

    let mut admin_url = Url::parse(&base_url).ok()?;
    admin_url.set_path("/postgres");

    let admin_pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect(admin_url.as_str())
        .await
        .ok()?;

    let name = format!("roster_test_{}", Uuid::new_v4().simple());
    sqlx::query(&format!("CREATE DATABASE {}", name))
        .execute(&admin_pool)
        .await
        .ok()?;
    admin_pool.close().await;

    let mut db_url = Url::parse(&base_url).ok()?;
    db_url.set_path(&format!("/{}", name));

    let db = Database::connect(&DatabaseConfig {
        url: db_url.to_string(),
        max_connections: 4,
        connection_timeout: 5,
    })
    .ok()?;
    db.migrate().await.expect("migrations should apply cleanly");

    Some(TestDb {
        db,
        admin_url: admin_url.to_string(),
        name,
    })
}

impl TestDb {
    pub async fn teardown(self) {
        self.db.close().await;
        if let Ok(pool) = PgPoolOptions::new()
            .max_connections(1)
            .connect(&self.admin_url)
            .await
        {
            let _ = sqlx::query(&format!("DROP DATABASE {} WITH (FORCE)", self.name))
                .execute(&pool)
                .await;
            pool.close().await;
        }
    }
}
