pub mod loader;
pub mod templates;
pub mod types;

pub use loader::{load_or_default, DEFAULT_CONFIG_FILE};
pub use templates::{ensure_config_file_exists, generate_default_config_template};
pub use types::{ClassifierConfig, EndpointConfig, ExampleMessage, FlowTiming};
