use std::path::Path;

use crate::config;

/// Load settings, falling back to defaults when the config is unreadable or
/// invalid. The second value explains a fallback; it is logged once logging
/// is up.
pub fn load_settings(explicit: Option<&Path>) -> (config::Settings, Option<String>) {
    match config::Settings::load(explicit) {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                (
                    config::Settings::default(),
                    Some(format!("invalid config, using defaults: {msg}")),
                )
            } else {
                (s, None)
            }
        }
        // Config is optional; failures should not prevent the player from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}
