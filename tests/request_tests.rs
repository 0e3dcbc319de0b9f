//! Tests for the request descriptor and its validation.

use relay::request::{Method, Request};
use relay::Error;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

#[test]
fn test_method_parsing_is_case_insensitive() {
    for (input, expected) in [
        ("get", Method::Get),
        ("POST", Method::Post),
        ("Put", Method::Put),
        ("delete", Method::Delete),
        ("HEAD", Method::Head),
        ("options", Method::Options),
        ("pAtCh", Method::Patch),
    ] {
        assert_eq!(input.parse::<Method>().unwrap(), expected);
    }
}

#[test]
fn test_unknown_method_is_rejected() {
    let err = "CONNECT".parse::<Method>().unwrap_err();
    assert!(matches!(err, Error::InvalidField { field: "method", .. }));
}

#[tokio::test]
async fn test_empty_interface_path_fails_before_any_transport_call() {
    let server = MockServer::start().await;
    let relay = bound_relay(&server).await;

    let err = relay.request(Request::get("")).await.unwrap_err();
    match err {
        Error::InvalidField { field, .. } => assert_eq!(field, "interface_path"),
        other => panic!("unexpected error: {other:?}"),
    }

    // Nothing reached the transport.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_interface_path_skips_loading() {
    let server = MockServer::start().await;
    let mut relay = bound_relay(&server).await;
    let (starts, stops) = install_counting_loading(&mut relay);

    let _ = relay.request(Request::get("")).await;

    assert_eq!(starts.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert_eq!(stops.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_absolute_interface_path_ignores_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/absolute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    // Bound to a base URL that would not resolve; the absolute path wins.
    let mut relay = unbound_relay();
    relay
        .bind(relay::http::TransportConfig {
            base_url: Some(reqwest::Url::parse("http://base.invalid").unwrap()),
            ..relay::http::TransportConfig::default()
        })
        .unwrap();

    let value = relay
        .request(Request::get(format!("{}/absolute", server.uri())))
        .await
        .unwrap();
    assert_eq!(value, json!({"ok": true}));
}

#[tokio::test]
async fn test_relative_path_without_base_url_fails() {
    let mut relay = unbound_relay();
    relay.bind(relay::http::TransportConfig::default()).unwrap();

    let err = relay.request(Request::get("/users")).await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_request_json_deserializes_payload() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: u64,
        name: String,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "ada"})),
        )
        .mount(&server)
        .await;

    let relay = bound_relay(&server).await;
    let user: User = relay.request_json(Request::get("/users/7")).await.unwrap();
    assert_eq!(
        user,
        User {
            id: 7,
            name: "ada".to_string()
        }
    );
}
