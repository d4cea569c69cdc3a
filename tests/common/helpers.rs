use download_station::{DownloadStation, DownloadStationBuilder, PollOptions};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

// Common test constants
pub const TEST_USER: &str = "ds-test-user";
pub const TEST_PASSWORD: &str = "ds-test-password";
pub const TEST_SID: &str = "TEST_SID_0001";
pub const AUTH_PATH: &str = "/webapi/auth.cgi";
pub const TASK_PATH: &str = "/webapi/DownloadStation/task.cgi";
pub const SEARCH_PATH: &str = "/webapi/DownloadStation/btsearch.cgi";
pub const INFO_PATH: &str = "/webapi/DownloadStation/info.cgi";
pub const QUERY_PATH: &str = "/webapi/query.cgi";

/// Installs a test subscriber; `RUST_LOG=download_station=debug` shows the client logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Matches requests whose last query parameter is `_sid`.
pub struct SidIsLast;

impl Match for SidIsLast {
    fn matches(&self, request: &Request) -> bool {
        request
            .url
            .query_pairs()
            .last()
            .is_some_and(|(key, _)| key == "_sid")
    }
}

/// Names of the query parameters of `request`, in wire order.
pub fn query_keys(request: &Request) -> Vec<String> {
    request
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect()
}

/// Value of the `method` query parameter of `request`.
pub fn query_method(request: &Request) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "method")
        .map(|(_, value)| value.into_owned())
}

/// Number of requests the server received for API `method`.
pub async fn received_with_method(server: &MockServer, api_method: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| query_method(request).as_deref() == Some(api_method))
        .count()
}

/// Envelope of a successful call.
pub fn success(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// Envelope of a failed call.
pub fn failure(code: i64) -> Value {
    json!({ "success": false, "error": { "code": code } })
}

/// `getinfo`/`list` payload holding one task.
pub fn task_payload(id: &str, status: &str) -> Value {
    success(json!({
        "total": 1,
        "offset": 0,
        "tasks": [{
            "id": id,
            "status": status,
            "title": "debian-12.iso",
            "type": "bt",
            "username": TEST_USER,
            "size": 658505728
        }]
    }))
}

/// Search `list` payload.
pub fn search_payload(finished: bool, items: Value) -> Value {
    let total = items.as_array().map_or(0, Vec::len);
    success(json!({
        "finished": finished,
        "offset": 0,
        "total": total,
        "items": items
    }))
}

/// Builder pointed at the mock server.
pub fn builder_for(server: &MockServer) -> DownloadStationBuilder {
    let address = server.address();
    DownloadStation::builder()
        .host(address.ip().to_string())
        .port(address.port())
        .username(TEST_USER)
        .password(TEST_PASSWORD)
}

/// Mounts a login endpoint answering with `TEST_SID`.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .and(query_param("method", "login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "sid": TEST_SID }))))
        .mount(server)
        .await;
}

/// Starts a mock server and returns it with a client logged into it.
pub async fn connected_station() -> (MockServer, DownloadStation) {
    init_tracing();
    let server = MockServer::start().await;
    mount_login(&server).await;
    let station = builder_for(&server)
        .connect()
        .await
        .expect("Failed to log into mock station");
    (server, station)
}

/// Poll options fast enough for tests, with a safety deadline.
pub fn fast_poll() -> PollOptions {
    PollOptions::new()
        .interval(Duration::from_millis(10))
        .initial_delay(Duration::ZERO)
        .deadline(Duration::from_secs(10))
}
