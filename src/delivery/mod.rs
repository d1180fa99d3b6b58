//! Report Delivery
//!
//! Renders a finished [`crate::types::Report`] into a markup document and
//! hands it to an external delivery channel. Delivery is best-effort by
//! design: the workflow is complete once a report exists, so every
//! failure here - an error status from the provider or a transport
//! error - is captured as a [`crate::types::DeliveryResult`] and logged,
//! never escalated.

/// Stage sequencing of render + send, absorbing all failures.
pub mod dispatcher;
/// The outbound transport seam and its HTTP mail implementation.
pub mod provider;
/// Deterministic HTML and markdown rendering of reports.
pub mod render;

pub use dispatcher::ReportDispatcher;
pub use provider::{DeliveryProvider, HttpMailProvider, OutboundMessage};
