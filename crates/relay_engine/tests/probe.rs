use std::sync::Arc;

use relay_engine::{
    FetchSettings, PageProber, ProbeReport, ProbeStrategy, ReqwestFetcher, MISSING_CONTAINER,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn prober() -> PageProber {
    PageProber::new(Arc::new(ReqwestFetcher::new(FetchSettings::default())))
}

#[tokio::test]
async fn probe_extracts_netflix_title_from_live_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/watch/1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body><div data-uia="video-title">Dark Flg. 3</div></body></html>"#,
            "text/html; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let url = format!("{}/watch/1", server.uri());
    let report = prober().probe(&url, ProbeStrategy::Netflix).await;

    assert_eq!(
        report,
        ProbeReport::Netflix {
            url: url.clone(),
            title: "Dark".to_string(),
        }
    );
}

#[tokio::test]
async fn probe_reports_dvd_poster_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/item/1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body>
                <div class="dvd-container" onclick="showDvdPoster()">
                    <img src="http://img/1.png" alt="Poster">
                </div>
            </body></html>"#,
            "text/html",
        ))
        .mount(&server)
        .await;

    let url = format!("{}/item/1", server.uri());
    let report = prober().probe(&url, ProbeStrategy::FsMirror).await;

    assert_eq!(
        report,
        ProbeReport::DvdPoster {
            url: url.clone(),
            image_src: "http://img/1.png".to_string(),
            alt_text: "Poster".to_string(),
        }
    );
}

#[tokio::test]
async fn probe_surfaces_missing_container_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/item/2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"<html><body><p>no poster</p></body></html>"#, "text/html"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/item/2", server.uri());
    let report = prober().probe(&url, ProbeStrategy::FsMirror).await;

    assert_eq!(
        report,
        ProbeReport::Failed {
            reason: MISSING_CONTAINER.to_string(),
        }
    );
}

#[tokio::test]
async fn probe_fails_on_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = format!("{}/gone", server.uri());
    let report = prober().probe(&url, ProbeStrategy::Netflix).await;

    match report {
        ProbeReport::Failed { reason } => {
            assert!(reason.contains("http status 500"), "reason: {reason}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}
