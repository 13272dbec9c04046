//! End-to-end runs of the demo sequence against a mocked Core Banking API.

use corebank::demo::run_demo;
use corebank::http::BankingApiClient;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn demo_completes_against_mixed_responses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"token":"abc"}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"id":"ACC1000"},{"id":"ACC1001"}]"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts/validate/ACC1000"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"valid":true}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts/validate/ACC2000"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"valid":false}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts/validate/ACC9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not found"}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts/balance/ACC1000"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"balance":1234.56}"#))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/transfer"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
        .mount(&server)
        .await;

    let client = BankingApiClient::new(&server.uri());
    run_demo(&client).await.unwrap();
}

#[tokio::test]
async fn demo_survives_uniform_server_failures() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = BankingApiClient::new(&server.uri());
    run_demo(&client).await.unwrap();
}

#[tokio::test]
async fn demo_survives_unreachable_host() {
    // Network errors are caught per test case, so the run still completes.
    let client = BankingApiClient::new("http://127.0.0.1:9");
    run_demo(&client).await.unwrap();
}
