//! Shared helpers for the wiremock-backed client tests

#![allow(dead_code)]

use investigate::http::ReqwestTransport;
use investigate::{ApiConfig, SearchClient, StaticTokenProvider};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "integration-token";
pub const API_ROOT: &str = "/api/investigate/v1";

pub type TestClient = SearchClient<ReqwestTransport, StaticTokenProvider>;

/// Client pointed at the mock server with a fixed token
pub fn client_for(server: &MockServer) -> TestClient {
    client_with(server, StaticTokenProvider::new(TEST_TOKEN), Duration::from_secs(10))
}

pub fn client_with(
    server: &MockServer,
    tokens: StaticTokenProvider,
    timeout: Duration,
) -> TestClient {
    client_at(&format!("{}{}", server.uri(), API_ROOT), tokens, timeout)
}

pub fn client_at(base_url: &str, tokens: StaticTokenProvider, timeout: Duration) -> TestClient {
    let config = ApiConfig::builder()
        .base_url(base_url)
        .timeout(timeout)
        .build()
        .expect("valid test config");
    let transport = ReqwestTransport::new().expect("reqwest client");
    SearchClient::with_parts(config, transport, tokens)
}

pub fn search_path() -> String {
    format!("{}/search", API_ROOT)
}

pub fn counters_path() -> String {
    format!("{}/counters", API_ROOT)
}

/// A `/search` body with one leaked-credential record
pub fn one_record_body() -> Value {
    json!({
        "results": [{
            "id": "a1b2c3",
            "email": "user@example.com",
            "domain": "example.com",
            "passwordType": "plain",
            "password": "hunter2",
            "sourceType": "Leak",
            "sourceTypeRaw": "leak",
            "source": "Combo list",
            "source_id": "src-1",
            "postedDate": 1_600_000_000,
            "indexed_date": 1_600_100_000,
            "authorized": true
        }],
        "total": 1,
        "password_hash": [],
        "service_host": [{"key": "example.com", "doc_count": 1}],
        "service_ip": [],
        "source": [{"key": "Combo list", "doc_count": 1, "source_type": "leak", "source_id": "src-1"}],
        "source_type": [{"key": "leak", "doc_count": 1}],
        "license": {
            "limit": 100,
            "time_frame": "month",
            "counter": 3,
            "type": "pro",
            "nextRefresh": "2026-11-01",
            "subscriptions": {"authorized": true, "unlimited": false, "licenesLevel": "pro"},
            "date_limit": 0
        },
        "isAssetsAvailable": false
    })
}

/// A `/search` body shaped like real traffic: nulls, float epochs, a chat
/// record with no email, and fields this crate has never heard of
pub fn loose_body() -> Value {
    json!({
        "results": [
            {
                "id": "a1b2c3",
                "email": "user@example.com",
                "domain": null,
                "passwordType": "hash",
                "postedDate": 1_600_000_000.5,
                "leakConfidence": 0.8
            },
            {
                "id": "m-77",
                "userName": "acme_bot",
                "sourceType": "instant_messaging",
                "service": "telegram",
                "postedDate": null,
                "channel": {"name": "dumps", "members": 1200}
            }
        ],
        "total": 2,
        "license": {"limit": 50, "counter": 5, "nextRefresh": null, "subscriptions": null},
        "isAssetsAvailable": null,
        "requestId": "req-9"
    })
}

pub fn counters_body() -> Value {
    json!({
        "data": {
            "license": {"limit": 0, "counter": 0},
            "indices": [
                {"name": "leaked_credentials", "counter": 4},
                {"name": "instant_messaging", "counter": 0}
            ]
        }
    })
}
