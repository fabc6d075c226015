use std::time::Duration;

use webguard_engine::{ContentFetcher, FetchFailure, FetchSettings, HttpFetcher, WatchTarget};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn target(server: &MockServer, route: &str, selector: &str) -> WatchTarget {
    WatchTarget::new(format!("{}{}", server.uri(), route), selector).expect("valid target")
}

#[tokio::test]
async fn fetcher_returns_selected_element_text_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body><p>noise</p><div id="price"> 42 EUR </div></body></html>"#,
            "text/html; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let text = fetcher
        .fetch(&target(&server, "/doc", "#price"))
        .await
        .expect("fetch ok");
    assert_eq!(text, "42 EUR");
}

#[tokio::test]
async fn fetcher_concatenates_nested_text_nodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nested"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body><div class="status"><span>Hello</span> <b>World</b></div></body></html>"#,
            "text/html; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let text = fetcher
        .fetch(&target(&server, "/nested", "div.status"))
        .await
        .expect("fetch ok");
    assert_eq!(text, "Hello World");
}

#[tokio::test]
async fn fetcher_reports_selector_miss_as_expected_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body><p>no match here</p></body></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch(&target(&server, "/doc", "#absent"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchFailure::SelectorNotMatched);
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch(&target(&server, "/missing", "#price"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchFailure::HttpStatus(404));
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
    let fetcher = HttpFetcher::new(settings);
    let err = fetcher
        .fetch(&target(&server, "/slow", "#price"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchFailure::Timeout);
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
    let fetcher = HttpFetcher::new(settings);
    let err = fetcher
        .fetch(&target(&server, "/large", "#price"))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FetchFailure::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_non_html_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"a":1}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch(&target(&server, "/json", "#price"))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FetchFailure::UnsupportedContentType {
            content_type: "application/json".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_honors_charset_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latin1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"<html><body><p id=\"t\">caf\xe9</p></body></html>".to_vec(),
            "text/html; charset=ISO-8859-1",
        ))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let text = fetcher
        .fetch(&target(&server, "/latin1", "#t"))
        .await
        .expect("fetch ok");
    assert_eq!(text, "caf\u{e9}");
}

#[test]
fn watch_target_rejects_invalid_url() {
    let err = WatchTarget::new("not a url", "#price").unwrap_err();
    assert_eq!(err.kind, FetchFailure::InvalidUrl);
}

#[test]
fn watch_target_rejects_invalid_selector() {
    let err = WatchTarget::new("https://example.com", "<<nonsense>>").unwrap_err();
    assert_eq!(err.kind, FetchFailure::InvalidSelector);
}
