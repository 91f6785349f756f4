use crate::error::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Main configuration structure for the classification flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Where classification requests are sent
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Cosmetic delays between flow steps
    #[serde(default)]
    pub timing: FlowTiming,
    /// Sample messages offered to the user
    #[serde(default = "default_examples")]
    pub examples: Vec<ExampleMessage>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            timing: FlowTiming::default(),
            examples: default_examples(),
        }
    }
}

/// Classification endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Scheme, host and port of the backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Absolute path of the classify route
    #[serde(default = "default_path")]
    pub path: String,
    /// Request timeout in seconds; the transport default applies when unset
    pub timeout_seconds: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
            timeout_seconds: None,
        }
    }
}

impl EndpointConfig {
    /// Full URL of the classify route.
    ///
    /// `path` is absolute, so any path component of `base_url` is replaced.
    pub fn url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(&self.path)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Delays between flow steps, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlowTiming {
    /// Step 1 stays active this long before analysis starts
    #[serde(default = "default_received_ms")]
    pub received_ms: u64,
    /// Pause after the response arrives, before step 2 completes
    #[serde(default = "default_analysis_ms")]
    pub analysis_ms: u64,
    #[serde(default = "default_classification_ms")]
    pub classification_ms: u64,
    #[serde(default = "default_routing_ms")]
    pub routing_ms: u64,
}

impl Default for FlowTiming {
    fn default() -> Self {
        Self {
            received_ms: default_received_ms(),
            analysis_ms: default_analysis_ms(),
            classification_ms: default_classification_ms(),
            routing_ms: default_routing_ms(),
        }
    }
}

impl FlowTiming {
    /// No delays at all
    pub fn instant() -> Self {
        Self {
            received_ms: 0,
            analysis_ms: 0,
            classification_ms: 0,
            routing_ms: 0,
        }
    }

    pub fn received(&self) -> Duration {
        Duration::from_millis(self.received_ms)
    }

    pub fn analysis(&self) -> Duration {
        Duration::from_millis(self.analysis_ms)
    }

    pub fn classification(&self) -> Duration {
        Duration::from_millis(self.classification_ms)
    }

    pub fn routing(&self) -> Duration {
        Duration::from_millis(self.routing_ms)
    }

    /// Sum of all cosmetic delays
    pub fn total(&self) -> Duration {
        self.received() + self.analysis() + self.classification() + self.routing()
    }
}

/// A sample customer message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExampleMessage {
    pub label: String,
    pub message: String,
    /// Intent the backend is expected to return, for reference only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_intent: Option<String>,
}

impl ExampleMessage {
    fn new(label: &str, message: &str, expected_intent: &str) -> Self {
        Self {
            label: label.to_string(),
            message: message.to_string(),
            expected_intent: Some(expected_intent.to_string()),
        }
    }
}

impl ClassifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.endpoint.base_url).map_err(|e| {
            ClassifierError::invalid_config(format!(
                "endpoint.base_url '{}' is not a valid URL: {}",
                self.endpoint.base_url, e
            ))
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClassifierError::invalid_config(format!(
                "endpoint.base_url must use http or https, got '{}'",
                base.scheme()
            )));
        }

        if !self.endpoint.path.starts_with('/') {
            return Err(ClassifierError::invalid_config(format!(
                "endpoint.path must start with '/', got '{}'",
                self.endpoint.path
            )));
        }

        if self.endpoint.timeout_seconds == Some(0) {
            return Err(ClassifierError::invalid_config(
                "endpoint.timeout_seconds must be greater than 0",
            ));
        }

        for (index, example) in self.examples.iter().enumerate() {
            if example.message.trim().is_empty() {
                return Err(ClassifierError::invalid_config(format!(
                    "example #{} ('{}') has an empty message",
                    index + 1,
                    example.label
                )));
            }
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_path() -> String {
    "/api/classify".to_string()
}

fn default_received_ms() -> u64 {
    800
}

fn default_analysis_ms() -> u64 {
    1000
}

fn default_classification_ms() -> u64 {
    800
}

fn default_routing_ms() -> u64 {
    800
}

fn default_examples() -> Vec<ExampleMessage> {
    vec![
        ExampleMessage::new(
            "Account access",
            "I can't log into my account, it keeps saying my password is wrong",
            "account_access_issues",
        ),
        ExampleMessage::new(
            "Billing",
            "I was charged twice for the same order this month",
            "billing_discrepancies",
        ),
        ExampleMessage::new(
            "Delivery",
            "My package was marked as delivered but it never arrived",
            "delivery_problems",
        ),
        ExampleMessage::new(
            "Returns",
            "How do I send back a jacket that doesn't fit?",
            "return_process_inquiries",
        ),
        ExampleMessage::new(
            "Refund",
            "I returned my item two weeks ago and still haven't received my refund",
            "refund_processing_issues",
        ),
        ExampleMessage::new(
            "Cancellation",
            "Please cancel the order I placed this morning",
            "order_cancellation_requests",
        ),
        ExampleMessage::new(
            "Installation",
            "I need help setting up the wall mount that came with my TV",
            "installation_support_requests",
        ),
    ]
}
