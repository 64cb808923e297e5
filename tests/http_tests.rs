//! HTTP adapter tests against a local one-shot server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use postlinker::api::{ApiResponse, HttpClient, PlainTransport, Transport};
use postlinker::config::{AppConfig, AuthConfig, TransportKind};
use postlinker::errors::PostlinkerError;
use postlinker::models::{ContentItem, ContentStatus, Credentials, ItemId};
use postlinker::runtime::PluginContext;
use postlinker::services::ShortlinkResolver;
use postlinker::storage::{MemoryContentSource, MemoryMetaStore, MetaStore};

/// Serve a single HTTP response, returning the base URL
fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}", addr)
}

fn plain_client() -> HttpClient {
    HttpClient::with_transport(Box::new(PlainTransport), Duration::from_secs(5))
}

#[test]
fn test_plain_transport_decodes_json() {
    let base = serve_once("200 OK", r#"{"status_code":200,"data":{"login":"me"}}"#);

    let response = plain_client().fetch(&format!("{}/v3/user/info?access_token=x", base));

    match response {
        ApiResponse::Json(json) => assert_eq!(json["data"]["login"], "me"),
        ApiResponse::Failed(e) => panic!("unexpected failure: {}", e),
    }
}

#[test]
fn test_plain_transport_raw_status_and_body() {
    let base = serve_once("201 Created", "hello");

    let resp = PlainTransport
        .get(&format!("{}/any", base), Duration::from_secs(5))
        .unwrap();

    assert_eq!(resp.status, 201);
    assert_eq!(resp.body, "hello");
}

#[test]
fn test_non_200_is_provider_rejected() {
    let base = serve_once("500 Internal Server Error", r#"{"status_code":500}"#);

    let response = plain_client().fetch(&format!("{}/v3/shorten?x=1", base));

    assert!(matches!(
        response.error(),
        Some(PostlinkerError::ProviderRejected(_))
    ));
}

#[test]
fn test_empty_body_is_invalid_response() {
    let base = serve_once("200 OK", "");

    let response = plain_client().fetch(&format!("{}/v3/shorten?x=1", base));

    assert!(matches!(
        response.error(),
        Some(PostlinkerError::InvalidResponse(_))
    ));
}

#[test]
fn test_non_json_is_invalid_response() {
    let base = serve_once("200 OK", "<html>maintenance</html>");

    let response = plain_client().fetch(&format!("{}/v3/shorten?x=1", base));

    assert!(matches!(
        response.error(),
        Some(PostlinkerError::InvalidResponse(_))
    ));
}

#[test]
fn test_connection_refused_is_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = plain_client().fetch(&format!("http://{}/v3/shorten?x=1", addr));

    assert!(matches!(
        response.error(),
        Some(PostlinkerError::TransportFailure(_))
    ));
}

#[test]
fn test_invalid_urls_fail_before_io() {
    let client = plain_client();

    for url in ["", "   ", "ftp://example.com/file", "http://"] {
        let response = client.fetch(url);
        assert!(
            matches!(response.error(), Some(PostlinkerError::InvalidRequest(_))),
            "{:?} should be rejected as InvalidRequest",
            url
        );
    }
}

#[cfg(feature = "ureq")]
mod ureq_transport {
    use super::*;
    use postlinker::api::UreqTransport;

    fn ureq_client() -> HttpClient {
        let timeout = Duration::from_secs(5);
        HttpClient::with_transport(Box::new(UreqTransport::new(timeout)), timeout)
    }

    #[test]
    fn test_ureq_decodes_json() {
        let base = serve_once("200 OK", r#"{"status_code":200,"data":{"url":"https://ex.it/a"}}"#);

        let response = ureq_client().fetch(&format!("{}/v3/shorten?longUrl=x", base));

        assert!(!response.is_failure());
    }

    #[test]
    fn test_ureq_http_error_is_provider_rejected() {
        let base = serve_once("404 Not Found", r#"{"error":"nope"}"#);

        let response = ureq_client().fetch(&format!("{}/v3/shorten?longUrl=x", base));

        assert!(matches!(
            response.error(),
            Some(PostlinkerError::ProviderRejected(_))
        ));
    }
}

/// Scenario A over a real socket with the plain transport
#[test]
fn test_resolve_over_plain_transport() {
    let base = serve_once(
        "200 OK",
        r#"{"status_code":200,"status_txt":"OK","data":{"url":"https://ex.it/ab12"}}"#,
    );

    let mut config = AppConfig::default();
    config.api.base_url = base;
    config.api.transport = TransportKind::Plain;
    config.auth = AuthConfig {
        authorized: true,
        credentials: Some(Credentials::oauth("TOKEN", "me")),
    };

    let store = Arc::new(MemoryMetaStore::new("_shortlink"));
    let content = Arc::new(MemoryContentSource::new());
    content.insert(
        ContentItem::new(42, "post", ContentStatus::Published)
            .with_permalink("https://example.com/post-42"),
    );
    let resolver = ShortlinkResolver::new(PluginContext::new(config, store.clone(), content));

    assert_eq!(resolver.resolve_id(ItemId(42)).as_deref(), Some("https://ex.it/ab12"));
    assert_eq!(store.get(ItemId(42)).as_deref(), Some("https://ex.it/ab12"));
}
