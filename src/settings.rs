//! Locating and loading `classifier.toml`

use crate::cli::Cli;
use crate::error::Result;
use classifier_flow::config::{load_or_default, DEFAULT_CONFIG_FILE};
use classifier_flow::ClassifierConfig;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "intent-router";

/// Configuration file in the user's config directory, e.g. `~/.config/intent-router/classifier.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(DEFAULT_CONFIG_FILE))
}

/// First existing candidate: the explicit path, `./classifier.toml`, then the user config file.
///
/// An explicit path is returned even when it does not exist so loading reports it.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    working_dir: &Path,
    user_config: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = working_dir.join(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    user_config.filter(|path| path.is_file())
}

/// Load configuration for a command, applying `--base-url`
pub fn load(cli: &Cli) -> Result<ClassifierConfig> {
    let working_dir = std::env::current_dir()?;
    let path = resolve_config_path(cli.config.as_deref(), &working_dir, user_config_path());

    let mut config = load_or_default(path.as_ref())?;
    if let Some(base_url) = &cli.base_url {
        tracing::debug!(%base_url, "overriding endpoint base URL");
        config.endpoint.base_url = base_url.clone();
        config.validate()?;
    }

    tracing::debug!(
        url = %config.endpoint.url()?,
        examples = config.examples.len(),
        "configuration ready"
    );
    Ok(config)
}

/// Where `init` writes: the `--config` path or `./classifier.toml`
pub fn init_target(cli: &Cli) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
