use crate::error::Result;
use std::fs;
use std::path::Path;

/// Generate the default classifier.toml template
pub fn generate_default_config_template() -> String {
    r#"# Classifier Flow Configuration
# Every section is optional; the values below are the built-in defaults.

# Classification backend
[endpoint]
base_url = "http://localhost:8080"
path = "/api/classify"
# Request timeout in seconds (transport default when omitted)
# timeout_seconds = 30

# Cosmetic pauses between flow steps, in milliseconds.
# Set them all to 0 to skip the animation.
[timing]
received_ms = 800
analysis_ms = 1000
classification_ms = 800
routing_ms = 800

# Sample messages offered in the interactive view
[[examples]]
label = "Account access"
message = "I can't log into my account, it keeps saying my password is wrong"
expected_intent = "account_access_issues"

[[examples]]
label = "Billing"
message = "I was charged twice for the same order this month"
expected_intent = "billing_discrepancies"

[[examples]]
label = "Delivery"
message = "My package was marked as delivered but it never arrived"
expected_intent = "delivery_problems"

[[examples]]
label = "Refund"
message = "I returned my item two weeks ago and still haven't received my refund"
expected_intent = "refund_processing_issues"
"#
    .to_string()
}

/// Write the default template to `config_path`.
///
/// An existing file is only replaced when `overwrite` is set. Returns whether a file was written.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, overwrite: bool) -> Result<bool> {
    let config_path = config_path.as_ref();

    if config_path.exists() && !overwrite {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(config_path, generate_default_config_template())?;
    tracing::info!(path = %config_path.display(), "wrote default configuration");
    Ok(true)
}
