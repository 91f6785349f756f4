use crate::error::{Result, ResultExt};
use crate::ui;
use classifier_flow::config::ensure_config_file_exists;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

pub fn execute(path: PathBuf, force: bool) -> Result<()> {
    ui::section_header("Classifier Configuration Setup");

    if path.exists() && !force {
        ui::warning_message(&format!("{} already exists", path.display()));
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Overwrite it with the default configuration?")
            .default(false)
            .interact()?;

        if !overwrite {
            ui::info_message("Keeping the existing configuration");
            return Ok(());
        }
    }

    ui::status_message("Writing default configuration");
    ensure_config_file_exists(&path, true)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ui::success_message(&format!("Created {}", path.display()));
    ui::info_message("Edit [endpoint] to point at your classification backend");
    Ok(())
}
