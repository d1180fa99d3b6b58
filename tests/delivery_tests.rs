//! Delivery tests with a mocked mail API.
//!
//! These use wiremock to stand in for the HTTP mail provider and
//! validate the wire format, status classification, and the dispatcher's
//! absorb-all-failures contract.

use chrono::{TimeZone, Utc};
use rstest::rstest;
use scout::delivery::{
    DeliveryProvider, HttpMailProvider, OutboundMessage, ReportDispatcher, render,
};
use scout::types::{DeliveryStatus, Report};
use scout::utils::config::DeliveryConfig;
use std::sync::Arc;
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn delivery_config(api_base: &str) -> DeliveryConfig {
    DeliveryConfig {
        api_base: api_base.to_string(),
        api_key: Some("test-key".to_string()),
        from_address: "research@example.com".to_string(),
        default_recipient: "recipient@example.com".to_string(),
    }
}

fn report() -> Report {
    Report {
        title: "Delivery Check".to_string(),
        executive_summary: "Two sentences.".to_string(),
        detailed_body: "## Body\n\nContent.".to_string(),
        key_findings: vec!["finding".to_string()],
        recommendations: vec!["recommendation".to_string()],
        follow_up_topics: vec![],
        sources: vec![],
        generated_at: Utc.with_ymd_and_hms(2026, 8, 6, 15, 45, 0).unwrap(),
    }
}

fn message() -> OutboundMessage {
    OutboundMessage {
        subject: "Research Report: Delivery Check".to_string(),
        html_body: render::render_html(&report()),
        recipient: None,
    }
}

// ============= Provider wire format =============

#[tokio::test]
async fn test_provider_posts_bearer_authed_mail_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .and(bearer_token("test-key"))
        .and(body_partial_json(serde_json::json!({
            "from": {"email": "research@example.com"},
            "subject": "Research Report: Delivery Check",
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpMailProvider::new(&delivery_config(&server.uri()));
    let status = provider.send(&message()).await.unwrap();
    assert_eq!(status, 202);
}

#[tokio::test]
async fn test_provider_uses_default_recipient_when_none_given() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .and(body_partial_json(serde_json::json!({
            "personalizations": [{"to": [{"email": "recipient@example.com"}]}],
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpMailProvider::new(&delivery_config(&server.uri()));
    provider.send(&message()).await.unwrap();
}

#[tokio::test]
async fn test_provider_honors_recipient_override() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .and(body_partial_json(serde_json::json!({
            "personalizations": [{"to": [{"email": "override@example.com"}]}],
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpMailProvider::new(&delivery_config(&server.uri()));
    let mut msg = message();
    msg.recipient = Some("override@example.com".to_string());
    provider.send(&msg).await.unwrap();
}

// ============= Dispatcher status classification =============

#[rstest]
#[case(200)]
#[case(201)]
#[case(202)]
#[tokio::test]
async fn test_every_2xx_status_counts_as_success(#[case] status: u16) {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    let provider: Arc<dyn DeliveryProvider> =
        Arc::new(HttpMailProvider::new(&delivery_config(&server.uri())));
    let dispatcher = ReportDispatcher::new(provider);

    let result = dispatcher.dispatch(&report(), None).await;
    assert_eq!(result.status, DeliveryStatus::Success);
}

#[rstest]
#[case(400)]
#[case(401)]
#[case(500)]
#[tokio::test]
async fn test_non_2xx_status_is_an_error_result(#[case] status: u16) {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    let provider: Arc<dyn DeliveryProvider> =
        Arc::new(HttpMailProvider::new(&delivery_config(&server.uri())));
    let dispatcher = ReportDispatcher::new(provider);

    let result = dispatcher.dispatch(&report(), None).await;
    assert_eq!(result.status, DeliveryStatus::Error);
    assert!(result.message.contains(&status.to_string()));
}

#[tokio::test]
async fn test_unreachable_mail_api_is_an_error_result_not_a_panic() {
    // Nothing listens here; the request itself fails
    let provider: Arc<dyn DeliveryProvider> =
        Arc::new(HttpMailProvider::new(&delivery_config("http://127.0.0.1:1")));
    let dispatcher = ReportDispatcher::new(provider);

    let result = dispatcher.dispatch(&report(), None).await;
    assert_eq!(result.status, DeliveryStatus::Error);
}

// ============= Output logging =============

#[test]
fn test_rendered_report_round_trips_through_the_output_log() {
    let r = report();
    let file = tempfile::NamedTempFile::new().unwrap();

    std::fs::write(file.path(), render::render_markdown(&r)).unwrap();
    let logged = std::fs::read_to_string(file.path()).unwrap();

    assert!(logged.contains("# Delivery Check"));
    assert!(logged.contains("- finding"));
    assert_eq!(logged, render::render_markdown(&r));
}
