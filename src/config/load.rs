use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

const DEFAULT_CONFIG_PATH: &str = "/etc/musikbox.toml";

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, lets environment variables
/// (prefix `MUSIKBOX__`) override it and falls back to struct defaults.
impl Settings {
    /// Load settings from an optional config file and the environment.
    ///
    /// `explicit` (the `--config` flag) wins over `MUSIKBOX_CONFIG_PATH` and
    /// the default path. A missing file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path(explicit);

        let mut builder = ::config::Config::builder().add_source(
            ::config::File::from(config_path.as_path())
                .format(::config::FileFormat::Toml)
                .required(false),
        );

        // Values stay strings so hex UIDs such as `04123456` keep their digits;
        // serde still converts them for bool and integer fields.
        builder = builder.add_source(::config::Environment::with_prefix("MUSIKBOX").separator("__"));

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.library.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("library.extensions must name at least one extension".to_string());
        }
        if self.reader.poll_interval_ms == 0 {
            return Err("reader.poll_interval_ms must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from the `--config` flag, `MUSIKBOX_CONFIG_PATH`
/// or the system-wide default.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    if let Some(p) = env::var_os("MUSIKBOX_CONFIG_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from(DEFAULT_CONFIG_PATH)
}
