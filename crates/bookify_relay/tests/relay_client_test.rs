use bookify_common::models::BookingPayload;
use bookify_common::services::MailRelayService;
use bookify_common::{BookifyError, UserMessage};
use bookify_config::MailRelayConfig;
use bookify_relay::{build_relay_message, MailRelayClient, RelayError};
use chrono::{NaiveDate, TimeZone, Utc};
use httpmock::prelude::*;
use serde_json::json;

fn payload() -> BookingPayload {
    BookingPayload {
        name: "Jan Kowalski".to_string(),
        email: "jan@example.com".to_string(),
        phone: "600-700-800".to_string(),
        service: "haircut".to_string(),
        service_name: "Haircut".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 10, 24).unwrap(),
        time: "11:00".to_string(),
        formatted_date: "Saturday, 24 October 2026".to_string(),
        notes: None,
        submitted_at: Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
    }
}

fn client_for(server: &MockServer, timeout_secs: u64) -> MailRelayClient {
    MailRelayClient::new(&MailRelayConfig {
        endpoint: server.url("/f/booking"),
        subject: "New booking request".to_string(),
        timeout_secs,
    })
    .unwrap()
}

#[tokio::test]
async fn test_relay_posts_json_and_accepts_2xx() {
    let server = MockServer::start_async().await;
    let message = build_relay_message(&payload(), "New booking request");

    let relay_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/f/booking")
                .header("content-type", "application/json")
                .json_body(json!({
                    "_replyto": "jan@example.com",
                    "_subject": "New booking request: Jan Kowalski",
                    "message": message.message.clone(),
                }));
            then.status(200).json_body(json!({ "ok": true }));
        })
        .await;

    let receipt = client_for(&server, 5).send(message).await.unwrap();

    relay_mock.assert_async().await;
    assert_eq!(receipt.status, 200);
}

#[tokio::test]
async fn test_relay_treats_non_success_as_failure() {
    let server = MockServer::start_async().await;
    let relay_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/f/booking");
            then.status(500).body("relay down");
        })
        .await;

    let err = client_for(&server, 5)
        .send(build_relay_message(&payload(), "New booking request"))
        .await
        .unwrap_err();

    relay_mock.assert_async().await;
    match &err {
        RelayError::ApiError {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, 500);
            assert_eq!(message, "relay down");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let shared: BookifyError = err.into();
    assert_eq!(
        shared.user_message(),
        "The request could not be sent. Please try again later."
    );
}

#[tokio::test]
async fn test_relay_rejection_status_is_not_success() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/f/booking");
            then.status(422).json_body(json!({ "error": "invalid email" }));
        })
        .await;

    let err = client_for(&server, 5)
        .send(build_relay_message(&payload(), "New booking request"))
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::ApiError { status_code: 422, .. }));
}

#[tokio::test]
async fn test_relay_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/f/booking");
            then.status(200).delay(std::time::Duration::from_secs(3));
        })
        .await;

    let err = client_for(&server, 1)
        .send(build_relay_message(&payload(), "New booking request"))
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::RequestError(ref e) if e.is_timeout()));
    let shared: BookifyError = err.into();
    assert!(matches!(shared, BookifyError::TimeoutError(_)));
}

#[tokio::test]
async fn test_unreachable_relay_is_a_request_error() {
    let client = MailRelayClient::new(&MailRelayConfig {
        endpoint: "http://127.0.0.1:9/f/booking".to_string(),
        subject: "New booking request".to_string(),
        timeout_secs: 2,
    })
    .unwrap();

    let err = client
        .send(build_relay_message(&payload(), "New booking request"))
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::RequestError(_)));
}
