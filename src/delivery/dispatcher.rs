use crate::delivery::provider::{DeliveryProvider, OutboundMessage};
use crate::delivery::render;
use crate::types::{DeliveryResult, Report};
use std::sync::Arc;

/// Hands a finished report to the delivery provider.
///
/// Dispatch never fails the caller: an error status from the provider
/// and a transport error both become a `DeliveryResult` with
/// `status = error` and a human-readable message.
pub struct ReportDispatcher {
    provider: Arc<dyn DeliveryProvider>,
}

/// Subject line derived from the report.
pub fn subject_line(report: &Report) -> String {
    format!("Research Report: {}", report.title)
}

impl ReportDispatcher {
    pub fn new(provider: Arc<dyn DeliveryProvider>) -> Self {
        Self { provider }
    }

    pub async fn dispatch(&self, report: &Report, recipient: Option<&str>) -> DeliveryResult {
        let message = OutboundMessage {
            subject: subject_line(report),
            html_body: render::render_html(report),
            recipient: recipient.map(String::from),
        };

        match self.provider.send(&message).await {
            Ok(status) if (200..300).contains(&status) => {
                tracing::info!(status, "report delivered");
                DeliveryResult::success("Report sent successfully")
            }
            Ok(status) => {
                tracing::warn!(status, "delivery rejected by provider");
                DeliveryResult::error(format!("Delivery failed with status {}", status))
            }
            Err(e) => {
                tracing::error!(error = %e, "delivery failed");
                DeliveryResult::error(e.to_string())
            }
        }
    }
}
