use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber; `RUST_LOG` wins over `--verbose`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "intent_router={default_level},classifier_flow={default_level},warn"
        ))
    });

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
    {
        eprintln!("Failed to install log subscriber: {err}");
    }
}
