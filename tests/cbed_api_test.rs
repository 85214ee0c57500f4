use httpmock::prelude::*;
use mes_e2e::api::cbed::CbedApi;
use mes_e2e::ApiClient;
use serde_json::json;
use std::sync::Arc;

fn cbed_api(server: &MockServer) -> CbedApi {
    CbedApi::new(Arc::new(ApiClient::new(server.base_url())))
}

#[tokio::test]
async fn create_on_201_returns_status_and_data() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cbed")
            .header("content-type", "application/json")
            .header("user-id", "user-1")
            .json_body(json!({"name": "X"}));
        then.status(201).json_body(json!({"id": 42, "name": "X"}));
    });

    let response = cbed_api(&server)
        .create(json!({"name": "X"}), "user-1")
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.data["id"], 42);
    assert_eq!(response.data["name"], "X");
    mock.assert();
}

#[tokio::test]
async fn create_on_400_errors_with_code_in_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/cbed");
        then.status(400).json_body(json!({"error": "name required"}));
    });

    let err = cbed_api(&server)
        .create(json!({}), "user-1")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn get_all_builds_full_query_string() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/cbed")
            .query_param("full", "true")
            .query_param("page", "1")
            .query_param("pageSize", "20");
        then.status(200).json_body(json!([{"id": 1}]));
    });

    let response = cbed_api(&server)
        .get_all(true, Some(1), Some(20))
        .await
        .unwrap();
    assert_eq!(response.status, 200);
    mock.assert();
}

#[tokio::test]
async fn get_all_omits_undefined_paging() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/cbed")
            .query_param("full", "false")
            .matches(|req| {
                let params = req.query_params.clone().unwrap_or_default();
                !params.iter().any(|(k, _)| k == "page" || k == "pageSize")
            });
        then.status(200).json_body(json!([]));
    });

    cbed_api(&server).get_all(false, None, None).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn ban_posts_to_action_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cbed/42/ban")
            .header("user-id", "user-1");
        then.status(200);
    });

    let response = cbed_api(&server).ban(42, "user-1").await.unwrap();
    assert_eq!(response.data["message"], "CBED banned successfully");
    mock.assert();
}

#[tokio::test]
async fn delete_empty_body_substitutes_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/cbed/42");
        then.status(204);
    });

    let response = cbed_api(&server).delete(42, "user-1").await.unwrap();
    assert_eq!(response.status, 204);
    assert_eq!(response.data["message"], "CBED deleted successfully");
}

#[tokio::test]
async fn update_sends_payload_to_id_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/cbed/7")
            .json_body(json!({"name": "Renamed"}));
        then.status(200).json_body(json!({"id": 7, "name": "Renamed"}));
    });

    let response = cbed_api(&server)
        .update(7, json!({"name": "Renamed"}), "user-1")
        .await
        .unwrap();
    assert_eq!(response.data["name"], "Renamed");
    mock.assert();
}
