//! Classifier Flow - customer message classification with a staged visual flow
//!
//! This crate sends a customer message to a classification endpoint and walks
//! a four-step flow (received, analyzed, classified, routed) while the request
//! is in flight, then renders the returned intent, agent and processing time.
//! The workflow only depends on the [`FlowView`] trait, so any front end can
//! host it.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod client;
pub mod page;
pub mod renderers;
pub mod testing;
pub mod traits;
pub mod widget;

// Re-export main types for convenience
pub use client::HttpClassifierClient;
pub use config::{ClassifierConfig, EndpointConfig, ExampleMessage, FlowTiming};
pub use error::{ClassifierError, ErrorKind, Result};
pub use page::{ElementId, PageLayout, PageSnapshot, PageView, BUSY_LABEL, TRIGGER_LABEL};
pub use traits::{ClassifierClient, FlowView};
pub use types::{
    ClassificationRequest, ClassificationResponse, ClassifyOutcome, ClassifyPhase, FlowStep,
    ResultFields, StepStatus,
};
pub use widget::MessageClassifierWidget;

/// Widget wired to the HTTP client and a shared headless page
pub type PageWidget = MessageClassifierWidget<HttpClassifierClient, std::sync::Arc<PageView>>;

/// Build a [`PageWidget`] from configuration
pub fn page_widget(
    config: &ClassifierConfig,
    page: std::sync::Arc<PageView>,
) -> Result<PageWidget> {
    let client = HttpClassifierClient::new(&config.endpoint)?;
    Ok(MessageClassifierWidget::new(client, page).with_timing(config.timing))
}
