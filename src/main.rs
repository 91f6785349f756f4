mod classify;
mod cli;
mod error;
mod init;
mod logging;
mod progress;
mod samples;
mod settings;
mod tui;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    // the alternate screen owns the terminal, so the TUI runs without a stderr subscriber
    if !matches!(cli.command, Commands::Tui) {
        logging::init(cli.verbose);
    }

    let result = match cli.command {
        Commands::Classify {
            ref message,
            no_delay,
            format,
        } => settings::load(&cli).and_then(|config| {
            classify::execute(
                config,
                classify::ClassifyArgs {
                    message: message.join(" "),
                    no_delay,
                    format,
                    verbose: cli.verbose,
                },
            )
        }),
        Commands::Tui => settings::load(&cli).and_then(tui::execute),
        Commands::Init { force } => init::execute(settings::init_target(&cli), force),
        Commands::Examples => settings::load(&cli).and_then(|config| samples::execute(&config)),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
