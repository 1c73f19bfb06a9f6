use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use geoattend::clock::FixedClock;
use geoattend::config::Config;
use geoattend::geofence::GeofenceReference;
use geoattend::storage::MemoryStore;

pub const EVENT_LAT: f64 = 30.4022;
pub const EVENT_LNG: f64 = 78.1288;
pub const RADIUS_M: f64 = 200.0;

/// A running test server backed by an in-memory store, so tests can assert
/// on exactly what was written.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
}

/// The instant every test server's clock reports.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 29, 10, 0, 0).unwrap()
}

pub fn test_config(geofence: Option<GeofenceReference>) -> Config {
    Config {
        database_url: "unused-by-tests".to_string(),
        host: [127, 0, 0, 1].into(),
        port: 0,
        allowed_origin: None,
        max_body_size: 65536,
        log_level: "warn".to_string(),
        geofence,
    }
}

/// Spawn with the default event geofence and an empty store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(
        Arc::new(MemoryStore::new()),
        Some(GeofenceReference::new(EVENT_LAT, EVENT_LNG, RADIUS_M)),
    )
    .await
}

pub async fn spawn_app_with(
    store: Arc<MemoryStore>,
    geofence: Option<GeofenceReference>,
) -> TestApp {
    let app = geoattend::build_app(
        store.clone(),
        Arc::new(FixedClock(fixed_time())),
        test_config(geofence),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server died");
    });

    TestApp {
        addr,
        client: Client::new(),
        store,
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit JSON to /submit, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit form-urlencoded data to /submit, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// A complete submission located at the event.
    pub fn valid_submission(&self) -> Value {
        json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "sapId": "500012345",
            "course": "B.Tech CSE",
            "batchYear": "2025",
            "latitude": EVENT_LAT,
            "longitude": EVENT_LNG,
        })
    }
}
