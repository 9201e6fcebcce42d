use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zos_swap_client::auth::AUTH_TOKEN_HEADER;
use zos_swap_client::swap::SwapClient;

async fn mount_history(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/swap/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

async fn token_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| {
            r.headers
                .get(AUTH_TOKEN_HEADER)
                .map(|v| v.to_str().unwrap().to_string())
        })
        .collect()
}

#[tokio::test]
async fn test_no_token_header_before_set() {
    let server = MockServer::start().await;
    mount_history(&server).await;

    let client = SwapClient::builder().base_url(server.uri()).build().unwrap();
    assert!(client.auth_token().is_none());
    client.get_swap_history().await.unwrap();

    assert_eq!(token_headers(&server).await, vec![None]);
}

#[tokio::test]
async fn test_set_token_attaches_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/swap/history"))
        .and(header("x-auth-token", "eyJhbGciOiJIUzI1NiJ9.payload.sig"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = SwapClient::builder().base_url(server.uri()).build().unwrap();
    client.set_auth_token("eyJhbGciOiJIUzI1NiJ9.payload.sig");
    client.get_swap_history().await.unwrap();
}

#[tokio::test]
async fn test_set_then_clear_token() {
    let server = MockServer::start().await;
    mount_history(&server).await;

    let client = SwapClient::builder().base_url(server.uri()).build().unwrap();

    client.get_swap_history().await.unwrap();
    client.set_auth_token("token-a");
    client.get_swap_history().await.unwrap();
    client.set_auth_token("token-b");
    client.get_swap_history().await.unwrap();
    client.clear_auth_token();
    client.get_swap_history().await.unwrap();

    assert!(client.auth_token().is_none());
    assert_eq!(
        token_headers(&server).await,
        vec![
            None,
            Some("token-a".to_string()),
            Some("token-b".to_string()),
            None
        ]
    );
}

#[tokio::test]
async fn test_builder_token_applies_to_first_request() {
    let server = MockServer::start().await;
    mount_history(&server).await;

    let client = SwapClient::builder()
        .base_url(server.uri())
        .auth_token("initial")
        .build()
        .unwrap();
    assert_eq!(client.auth_token().as_deref(), Some("initial"));
    client.get_swap_history().await.unwrap();

    assert_eq!(token_headers(&server).await, vec![Some("initial".to_string())]);
}

#[tokio::test]
async fn test_token_shared_across_tasks() {
    let server = MockServer::start().await;
    mount_history(&server).await;

    let client = Arc::new(
        SwapClient::builder()
            .base_url(server.uri())
            .build()
            .unwrap(),
    );
    client.set_auth_token("shared");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_swap_history().await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let headers = token_headers(&server).await;
    assert_eq!(headers.len(), 4);
    assert!(headers.iter().all(|h| h.as_deref() == Some("shared")));
}

#[tokio::test]
async fn test_content_type_and_user_agent_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/swap/currencies"))
        .and(header("content-type", "application/json"))
        .and(header("x-client", "integration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = SwapClient::builder()
        .base_url(server.uri())
        .header(
            reqwest::header::HeaderName::from_static("x-client"),
            reqwest::header::HeaderValue::from_static("integration"),
        )
        .build()
        .unwrap();
    client.get_currencies().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(user_agent.starts_with("zos-swap-client/"));
}
