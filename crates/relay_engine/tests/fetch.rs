use std::time::Duration;

use relay_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_returns_body_status_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .and(header("user-agent", "page-relay fetch script"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/doc", server.uri());

    let output = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(output.metadata.status, 200);
    assert_eq!(output.metadata.original_url, url);
    assert_eq!(output.metadata.final_url, output.metadata.original_url);
    assert!(output
        .metadata
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("text/html"));
    assert!(output
        .metadata
        .headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("content-type")));
    assert_eq!(output.bytes, b"<html>ok</html>");
    assert_eq!(output.metadata.byte_len, output.bytes.len() as u64);
}

#[tokio::test]
async fn fetcher_passes_non_success_status_through() {
    // The fetch scripts print whatever status came back; a 404 body is still
    // a body worth scanning.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let output = fetcher.fetch(&url).await.expect("fetch completes");
    assert_eq!(output.metadata.status, 404);
    assert_eq!(output.bytes, b"not here");
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .insert_header("Content-Length", "11")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/large", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_invalid_url() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
