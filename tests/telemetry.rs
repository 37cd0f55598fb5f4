mod common;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aliyunpan_auth::{ErrorKind, TokenClient};

use common::{capture_logs, config, token_reply};

#[tokio::test]
async fn success_logs_lifecycle_without_secrets() {
    let (lines, _guard) = capture_logs();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/account/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_reply(
            "secret-access",
            "secret-refresh",
            "2024-01-01T00:00:00Z",
        )))
        .mount(&server)
        .await;

    TokenClient::new(config(&server))
        .expect("client")
        .exchange_access_token("secret-input")
        .await
        .expect("exchange");

    let logs = lines.lock().unwrap().join("");
    assert!(logs.contains("exchange.start"), "logs: {logs}");
    assert!(logs.contains("exchange.success"), "logs: {logs}");
    assert!(!logs.contains("secret-"), "token leaked into logs: {logs}");

    let ids: Vec<&str> = logs
        .lines()
        .filter(|line| line.contains("exchange."))
        .filter_map(attempt_id)
        .collect();
    assert_eq!(ids.len(), 2, "logs: {logs}");
    assert_eq!(ids[0], ids[1], "start and end belong to one attempt");
}

fn attempt_id(line: &str) -> Option<&str> {
    let rest = line.split("attempt_id=").nth(1)?;
    rest.split_whitespace().next()
}

#[tokio::test]
async fn rejection_logs_failure_outcome() {
    let (lines, _guard) = capture_logs();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/account/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": "InvalidParameter.RefreshToken",
            "message": "refresh_token is not valid"
        })))
        .mount(&server)
        .await;

    let err = TokenClient::new(config(&server))
        .expect("client")
        .exchange_access_token("stale")
        .await
        .expect_err("rejected");
    assert_eq!(err.kind(), ErrorKind::Api);

    let logs = lines.lock().unwrap().join("");
    assert!(logs.contains("exchange.failure"), "logs: {logs}");
    assert!(logs.contains("Rejected"), "logs: {logs}");
    assert!(logs.contains("InvalidParameter.RefreshToken"), "logs: {logs}");
}
