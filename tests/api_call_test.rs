use httpmock::prelude::*;
use mes_e2e::{ApiCall, ApiClient, SuiteError, Verb};
use reqwest::Method;
use serde_json::json;

#[tokio::test]
async fn json_body_sets_content_type() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/orders")
            .header("content-type", "application/json");
        then.status(201).json_body(json!({"id": 1}));
    });

    let client = ApiClient::new(server.base_url());
    let call = ApiCall::new(Method::POST, "/orders")
        .describe("order", Verb::Create)
        .json(json!({"number": "ORD-1"}));

    let response = client.send(call).await.unwrap();
    assert_eq!(response.status, 201);
    mock.assert();
}

#[tokio::test]
async fn caller_header_overrides_content_type() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/orders")
            .header("content-type", "application/merge-patch+json");
        then.status(200).json_body(json!({}));
    });

    let client = ApiClient::new(server.base_url());
    let call = ApiCall::new(Method::POST, "/orders")
        .describe("order", Verb::Update)
        .json(json!({"quantity": 2}))
        .header("Content-Type", "application/merge-patch+json");

    client.send(call).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn explicit_user_id_header_attached() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/cbed").header("user-id", "user-7");
        then.status(201).json_body(json!({"id": 5}));
    });

    let client = ApiClient::new(server.base_url());
    let call = ApiCall::new(Method::POST, "/cbed")
        .describe("CBED", Verb::Create)
        .json(json!({"name": "Bracket"}))
        .as_user("user-7");

    client.send(call).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn default_user_applies_when_not_overridden() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/orders").header("user-id", "autotest");
        then.status(200).json_body(json!([]));
    });

    let client = ApiClient::new(server.base_url()).with_default_user("autotest");
    let call = ApiCall::new(Method::GET, "/orders").describe("orders", Verb::Fetch);

    client.send(call).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn strict_non_2xx_errors_with_status_in_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/cbed");
        then.status(400).json_body(json!({"error": "bad designation"}));
    });

    let client = ApiClient::new(server.base_url());
    let call = ApiCall::new(Method::POST, "/cbed")
        .describe("CBED", Verb::Create)
        .json(json!({"name": ""}));

    let err = client.send(call).await.unwrap_err();
    assert!(err.to_string().contains("400"));
    assert!(matches!(
        err,
        SuiteError::UnexpectedStatus { status: 400, .. }
    ));
}

#[tokio::test]
async fn lenient_non_2xx_returns_status_and_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/monitoring/health");
        then.status(503).json_body(json!({"state": "degraded"}));
    });

    let client = ApiClient::new(server.base_url());
    let call = ApiCall::new(Method::GET, "/monitoring/health")
        .describe("monitoring data", Verb::Fetch)
        .lenient();

    let response = client.send(call).await.unwrap();
    assert_eq!(response.status, 503);
    assert_eq!(response.data["state"], "degraded");
}

#[tokio::test]
async fn empty_delete_body_yields_substitute_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/cbed/9");
        then.status(204);
    });

    let client = ApiClient::new(server.base_url());
    let call = ApiCall::new(Method::DELETE, "/cbed/9").describe("CBED", Verb::Delete);

    let response = client.send(call).await.unwrap();
    assert_eq!(response.status, 204);
    assert_eq!(response.data["message"], "CBED deleted successfully");
}

#[tokio::test]
async fn non_json_2xx_falls_back_to_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/versioning/current");
        then.status(200).body("build 2024.07.3");
    });

    let client = ApiClient::new(server.base_url());
    let call = ApiCall::new(Method::GET, "/versioning/current").describe("version", Verb::Fetch);

    let response = client.send(call).await.unwrap();
    assert_eq!(response.data, serde_json::Value::String("build 2024.07.3".to_string()));
}

#[tokio::test]
async fn query_pairs_rendered_in_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/cbed")
            .query_param("full", "true")
            .query_param("page", "1")
            .query_param("pageSize", "20");
        then.status(200).json_body(json!([]));
    });

    let client = ApiClient::new(server.base_url());
    let call = ApiCall::new(Method::GET, "/cbed")
        .describe("CBED", Verb::Fetch)
        .query("full", Some(true))
        .query("page", Some(1))
        .query("pageSize", Some(20));

    client.send(call).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn none_query_values_are_omitted() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/cbed")
            .query_param("full", "true")
            .matches(|req| {
                let params = req.query_params.clone().unwrap_or_default();
                !params.iter().any(|(k, _)| k == "page" || k == "pageSize")
            });
        then.status(200).json_body(json!([]));
    });

    let client = ApiClient::new(server.base_url());
    let call = ApiCall::new(Method::GET, "/cbed")
        .describe("CBED", Verb::Fetch)
        .query("full", Some(true))
        .query("page", None::<u32>)
        .query("pageSize", None::<u32>);

    client.send(call).await.unwrap();
    mock.assert();
}
