use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "intent-router")]
#[command(
    author,
    version,
    about = "Classify customer messages and route them to the right support agent"
)]
pub struct Cli {
    /// Configuration file (defaults to ./classifier.toml, then the user config directory)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the classification backend base URL
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a customer message and show the assigned agent
    Classify {
        /// The customer message (several words are joined with spaces)
        #[clap(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Skip the pauses between flow steps
        #[clap(long, default_value_t = false)]
        no_delay: bool,

        /// Output format for the result
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Open the interactive classification flow
    Tui,

    /// Write a default classifier.toml
    Init {
        /// Overwrite an existing file without asking
        #[clap(long, default_value_t = false)]
        force: bool,
    },

    /// List the configured example messages
    Examples,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Step progress followed by the result fields
    Text,

    /// A single JSON document, no progress output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_joins_words() {
        let cli = Cli::try_parse_from([
            "intent-router",
            "classify",
            "where",
            "is",
            "my",
            "parcel",
            "--no-delay",
        ])
        .unwrap();

        match cli.command {
            Commands::Classify {
                message,
                no_delay,
                format,
            } => {
                assert_eq!(message.join(" "), "where is my parcel");
                assert!(no_delay);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_classify_requires_a_message() {
        assert!(Cli::try_parse_from(["intent-router", "classify"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "intent-router",
            "examples",
            "--config",
            "custom.toml",
            "--base-url",
            "http://10.0.0.5:8080",
            "-v",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Examples));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.base_url.as_deref(), Some("http://10.0.0.5:8080"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_json_format_and_init_force() {
        let cli =
            Cli::try_parse_from(["intent-router", "classify", "-f", "json", "refund"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Classify {
                format: OutputFormat::Json,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["intent-router", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }
}
