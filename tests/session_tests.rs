//! Tests for login, logout and raw dispatch.

use download_station::{ApiRequest, DownloadStation, Error};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_login_yields_session_id() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .and(query_param("api", "SYNO.API.Auth"))
        .and(query_param("version", "2"))
        .and(query_param("method", "login"))
        .and(query_param("account", TEST_USER))
        .and(query_param("passwd", TEST_PASSWORD))
        .and(query_param("session", "DownloadStation"))
        .and(query_param("format", "cookie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "sid": "X" }))))
        .expect(1)
        .mount(&server)
        .await;

    let station = builder_for(&server).connect().await.unwrap();
    assert_eq!(station.session_id().as_str(), "X");
}

#[tokio::test]
async fn test_login_failure_carries_payload() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure(400)))
        .expect(1)
        .mount(&server)
        .await;

    match builder_for(&server).connect().await {
        Err(Error::Authentication { payload }) => {
            assert_eq!(payload["success"], false);
            assert_eq!(payload["error"]["code"], 400);
        }
        other => panic!("Expected Error::Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_without_sid_is_malformed() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    assert!(matches!(
        builder_for(&server).connect().await,
        Err(Error::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_unreachable_station_is_transport_error() {
    init_tracing();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let result = DownloadStation::builder()
        .host("127.0.0.1")
        .port(port)
        .username(TEST_USER)
        .password(TEST_PASSWORD)
        .connect()
        .await;

    match result {
        Err(e) => assert!(e.is_transport(), "Expected a transport error, got {e:?}"),
        Ok(_) => panic!("Login against a closed port should fail"),
    }
}

#[tokio::test]
async fn test_custom_path_prefix() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/custom/auth.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "sid": "P" }))))
        .expect(1)
        .mount(&server)
        .await;

    let station = builder_for(&server)
        .path_prefix("/custom/")
        .connect()
        .await
        .unwrap();
    assert_eq!(station.session_id().as_str(), "P");
}

#[tokio::test]
async fn test_reauthenticate_replaces_session() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "sid": "first" }))))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "sid": "second" }))))
        .mount(&server)
        .await;

    let mut station = builder_for(&server).connect().await.unwrap();
    assert_eq!(station.session_id().as_str(), "first");

    station.reauthenticate().await.unwrap();
    assert_eq!(station.session_id().as_str(), "second");
}

#[tokio::test]
async fn test_unknown_endpoint_sends_nothing() {
    let (server, station) = connected_station().await;
    let before = server.received_requests().await.unwrap().len();

    for name in ["DS_Unknown", "ds_task", "SYNO.DownloadStation.Task"] {
        let request = ApiRequest::new(name, "list", 1).session(station.session_id());
        match station.dispatch(&request).await {
            Err(Error::UnknownEndpoint(missing)) => assert_eq!(missing, name),
            other => panic!("Expected UnknownEndpoint, got {other:?}"),
        }
    }

    let after = server.received_requests().await.unwrap().len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_unsupported_version_sends_nothing() {
    let (server, station) = connected_station().await;
    let before = server.received_requests().await.unwrap().len();

    let request = ApiRequest::new("DS_BT_Search", "list", 2);
    assert!(matches!(
        station.dispatch(&request).await,
        Err(Error::UnsupportedVersion { version: 2, .. })
    ));

    assert_eq!(server.received_requests().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_raw_dispatch_exposes_status_code() {
    let (server, station) = connected_station().await;

    Mock::given(method("GET"))
        .and(path(TASK_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let request = ApiRequest::new("DS_Task", "list", 1).session(station.session_id());
    let response = station.dispatch(&request).await.unwrap();
    assert_eq!(response.status.as_u16(), 503);
    assert_eq!(response.body, "maintenance");

    match station.dispatch_json::<serde_json::Value>(&request).await {
        Err(e @ Error::Http { .. }) => assert!(e.is_transport()),
        other => panic!("Expected Error::Http, got {other:?}"),
    }
}

#[tokio::test]
async fn test_logout_closes_session() {
    let (server, station) = connected_station().await;

    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .and(query_param("method", "logout"))
        .and(query_param("version", "1"))
        .and(query_param("session", "DownloadStation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(station.logout().await);

    let requests = server.received_requests().await.unwrap();
    let logout = requests
        .iter()
        .find(|request| query_method(request).as_deref() == Some("logout"))
        .unwrap();
    assert_eq!(
        query_keys(logout),
        ["api", "version", "method", "session"]
    );
}

#[tokio::test]
async fn test_logout_failure_is_not_an_error() {
    let (server, station) = connected_station().await;

    Mock::given(method("GET"))
        .and(path(AUTH_PATH))
        .and(query_param("method", "logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(!station.logout().await);
}
