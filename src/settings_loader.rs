use crate::settings::GeneratorSettings;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{debug, info};
use std::fs::File;
use std::path::Path;

/// Load and validate generator settings from a YAML file
pub fn load_settings(settings_path: &Path) -> Result<GeneratorSettings> {
    info!("Loading generator settings from: {:?}", settings_path);

    let file = File::open(settings_path)
        .wrap_err_with(|| format!("Failed to open settings file '{}'", settings_path.display()))?;

    let settings: GeneratorSettings = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse settings file '{}'", settings_path.display()))?;

    settings.validate()?;
    debug!("Loaded settings: {:?}", settings);

    Ok(settings)
}

/// Resolve the effective settings: the file when given, defaults otherwise
pub fn resolve_settings(settings_path: Option<&Path>) -> Result<GeneratorSettings> {
    match settings_path {
        Some(path) => load_settings(path),
        None => {
            info!("No settings file given, using built-in defaults");
            Ok(GeneratorSettings::default())
        }
    }
}
