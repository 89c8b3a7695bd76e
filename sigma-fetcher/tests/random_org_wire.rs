//! Integration test: `RandomOrgSource` against a mock JSON-RPC endpoint.
//!
//! Verifies the request envelope, response decoding, error mapping, and that
//! cancellation and missing credentials short-circuit the network call.

use std::time::{Duration, Instant};

use serde_json::json;
use sigma_core::SetSize;
use sigma_fetcher::{
    BatchFetcher, FetchError, RandomOrgSource, RandomSource, UpstreamConfig, UpstreamError,
};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INVOKE_PATH: &str = "/json-rpc/4/invoke";

fn size(n: u32) -> SetSize {
    SetSize::new(n).unwrap_or_else(|e| panic!("invalid size: {e}"))
}

fn source_for(server: &MockServer, api_key: Option<&str>) -> RandomOrgSource {
    let config = UpstreamConfig::new(api_key.map(str::to_owned))
        .with_endpoint(format!("{}{INVOKE_PATH}", server.uri()));
    RandomOrgSource::new(config).unwrap_or_else(|e| panic!("client build failed: {e}"))
}

fn success_body(data: &[u32]) -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "result": {
            "random": { "data": data, "completionTime": "2026-10-19 12:00:00Z" },
            "bitsUsed": 20,
            "bitsLeft": 249_980,
            "requestsLeft": 999,
            "advisoryDelay": 0
        },
        "id": "test"
    })
}

#[tokio::test]
async fn fetch_sends_generate_integers_and_returns_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "generateIntegers",
            "params": {
                "apiKey": "test-key",
                "n": 3,
                "min": 1,
                "max": 100,
                "replacement": true,
                "base": 10
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&[4, 8, 15])))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server, Some("test-key"));
    let set = source
        .fetch(size(3), &CancellationToken::new())
        .await
        .unwrap_or_else(|e| panic!("fetch failed: {e}"));

    assert_eq!(set.values(), &[4, 8, 15]);
}

#[tokio::test]
async fn fetch_provider_error_maps_to_protocol() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "error": { "code": 400, "message": "The API key you specified does not exist", "data": null },
            "id": "test"
        })))
        .mount(&server)
        .await;

    let source = source_for(&server, Some("bogus"));
    match source.fetch(size(2), &CancellationToken::new()).await {
        Err(UpstreamError::Protocol { code, message }) => {
            assert_eq!(code, 400);
            assert!(message.contains("does not exist"));
        }
        other => panic!("expected Protocol, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_non_json_body_maps_to_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let source = source_for(&server, Some("k"));
    let result = source.fetch(size(2), &CancellationToken::new()).await;
    assert!(matches!(result, Err(UpstreamError::Malformed(_))), "got {result:?}");
}

#[tokio::test]
async fn fetch_short_data_maps_to_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&[42, 7])))
        .mount(&server)
        .await;

    let source = source_for(&server, Some("k"));
    match source.fetch(size(5), &CancellationToken::new()).await {
        Err(UpstreamError::Malformed(msg)) => assert!(msg.contains("expected 5"), "message: {msg}"),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_out_of_range_data_maps_to_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&[500, 0])))
        .mount(&server)
        .await;

    let source = source_for(&server, Some("k"));
    let result = source.fetch(size(2), &CancellationToken::new()).await;
    assert!(matches!(result, Err(UpstreamError::Malformed(_))), "got {result:?}");
}

#[tokio::test]
async fn fetch_http_error_status_maps_to_transport() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = source_for(&server, Some("k"));
    match source.fetch(size(2), &CancellationToken::new()).await {
        Err(UpstreamError::Transport(msg)) => assert!(msg.contains("503"), "message: {msg}"),
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_unreachable_endpoint_maps_to_transport() {
    let server = MockServer::start().await;
    let source = source_for(&server, Some("k"));
    drop(server);

    let result = source.fetch(size(1), &CancellationToken::new()).await;
    assert!(matches!(result, Err(UpstreamError::Transport(_))), "got {result:?}");
}

#[tokio::test]
async fn fetch_cancelled_mid_flight_returns_promptly() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body(&[1]))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let source = source_for(&server, Some("k"));
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let result = source.fetch(size(1), &token).await;
    assert!(matches!(result, Err(UpstreamError::Cancelled)), "got {result:?}");
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "cancellation must not wait for the delayed response"
    );
}

#[tokio::test]
async fn batch_without_api_key_fails_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&[1, 2])))
        .expect(0)
        .mount(&server)
        .await;

    let fetcher = BatchFetcher::new(source_for(&server, None));
    let result = fetcher
        .fetch_batch(4, size(2), &CancellationToken::new())
        .await;

    assert!(
        matches!(
            result,
            Err(FetchError::Upstream {
                source: UpstreamError::Config(_),
                ..
            })
        ),
        "missing credential must fail the batch with Config, got {result:?}"
    );
    // `expect(0)` is verified when `server` drops.
}

#[tokio::test]
async fn batch_of_successful_draws_appends_union() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&[10, 20, 30])))
        .expect(2)
        .mount(&server)
        .await;

    let fetcher = BatchFetcher::new(source_for(&server, Some("k")));
    let result = fetcher
        .fetch_batch(2, size(3), &CancellationToken::new())
        .await
        .unwrap_or_else(|e| panic!("batch failed: {e}"));

    assert_eq!(result.len(), 3);
    let union = result
        .union()
        .unwrap_or_else(|| panic!("union entry missing"));
    assert_eq!(union.data, vec![10, 20, 30, 10, 20, 30]);
    assert!((union.stddev - 8.1650).abs() < 1e-4);
}
