//! Tests for the finished-download correction workflow.

use download_station::{Error, PollOptions};

use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

const TASK_ID: &str = "dbid_77";

async fn mount_resume(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path(TASK_PATH))
        .and(query_param("method", "resume"))
        .and(query_param("id", TASK_ID))
        .and(SidIsLast)
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_delete(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path(TASK_PATH))
        .and(query_param("method", "delete"))
        .and(query_param("id", TASK_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, status: &str, times: Option<u64>) {
    let mock = Mock::given(method("GET"))
        .and(path(TASK_PATH))
        .and(query_param("method", "getinfo"))
        .and(query_param("id", TASK_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_payload(TASK_ID, status)));

    match times {
        Some(times) => {
            mock.up_to_n_times(times)
                .with_priority(1)
                .expect(times)
                .mount(server)
                .await
        }
        None => mock.mount(server).await,
    }
}

#[tokio::test]
async fn test_seeding_ends_after_one_round() {
    let (server, station) = connected_station().await;
    mount_resume(&server, 1).await;
    mount_status(&server, "seeding", None).await;
    mount_delete(&server, 0).await;

    assert!(station
        .correct_finished_download(TASK_ID, &fast_poll())
        .await
        .unwrap());
    assert_eq!(received_with_method(&server, "getinfo").await, 1);
}

#[tokio::test]
async fn test_downloading_deletes_the_task_once() {
    let (server, station) = connected_station().await;
    mount_resume(&server, 1).await;
    mount_status(&server, "downloading", None).await;
    mount_delete(&server, 1).await;

    assert!(station
        .correct_finished_download(TASK_ID, &fast_poll())
        .await
        .unwrap());
}

#[tokio::test]
async fn test_keeps_resuming_while_finished() {
    let (server, station) = connected_station().await;
    mount_resume(&server, 3).await;
    mount_status(&server, "finished", Some(2)).await;
    mount_status(&server, "seeding", None).await;
    mount_delete(&server, 0).await;

    assert!(station
        .correct_finished_download(TASK_ID, &fast_poll())
        .await
        .unwrap());
    assert_eq!(received_with_method(&server, "getinfo").await, 3);
}

#[tokio::test]
async fn test_other_status_ends_the_loop() {
    let (server, station) = connected_station().await;
    mount_resume(&server, 1).await;
    mount_status(&server, "paused", None).await;
    mount_delete(&server, 0).await;

    assert!(station
        .correct_finished_download(TASK_ID, &fast_poll())
        .await
        .unwrap());
}

#[tokio::test]
async fn test_unreadable_task_is_malformed() {
    let (server, station) = connected_station().await;
    mount_resume(&server, 1).await;

    Mock::given(method("GET"))
        .and(path(TASK_PATH))
        .and(query_param("method", "getinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure(544)))
        .mount(&server)
        .await;

    assert!(matches!(
        station.correct_finished_download(TASK_ID, &fast_poll()).await,
        Err(Error::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_stuck_task_hits_deadline() {
    let (server, station) = connected_station().await;

    Mock::given(method("GET"))
        .and(path(TASK_PATH))
        .and(query_param("method", "resume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
        .mount(&server)
        .await;
    mount_status(&server, "finished", None).await;

    let options = PollOptions::new()
        .interval(Duration::from_millis(10))
        .deadline(Duration::from_millis(150));

    match station.correct_finished_download(TASK_ID, &options).await {
        Err(Error::Timeout { operation }) => assert_eq!(operation, "correct finished download"),
        other => panic!("Expected Error::Timeout, got {other:?}"),
    }
}
