use crate::error::{Result, ResultExt};
use crate::ui;
use dialoguer::{theme::ColorfulTheme, Confirm};
use investigate::config::{ensure_config_file_exists, DEFAULT_TOKEN_ENV_VARS};
use std::path::Path;

pub fn execute(path: String, force: bool) -> Result<()> {
    let config_path = Path::new(&path);
    ui::heading("init", &path);

    let overwrite = if config_path.exists() && !force {
        ui::note(&format!("{} already exists", config_path.display()));
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Overwrite it with the defaults?")
            .default(false)
            .interact()?
    } else {
        force
    };

    let written = ensure_config_file_exists(config_path, overwrite)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    if written {
        ui::note(&format!("Created {}", config_path.display()));
        ui::note(&format!(
            "Set {} with your API token; it is never read from the file",
            DEFAULT_TOKEN_ENV_VARS.join(" or ")
        ));
    } else {
        ui::note("Kept the existing configuration");
    }
    Ok(())
}
