use std::path::PathBuf;

use serde::Deserialize;

use crate::library::DEFAULT_EXTENSIONS;

/// Top-level settings loaded from `musikbox.toml`.
///
/// File format: TOML
/// Default path: `/etc/musikbox.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `MUSIKBOX__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
///
/// Keys are snake_case; the kebab-case spelling (`music-dir`,
/// `[action-tags]`, `pause-uid`) is accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory whose sub-directories are the albums.
    #[serde(alias = "music-dir")]
    pub music_dir: PathBuf,
    /// Run unattended, driven by the tag reader instead of stdin.
    pub rfid: bool,
    #[serde(alias = "action-tags")]
    pub action_tags: ActionTagSettings,
    pub library: LibrarySettings,
    pub reader: ReaderSettings,
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_dir: PathBuf::from("/home/pi/Music"),
            rfid: false,
            action_tags: ActionTagSettings::default(),
            library: LibrarySettings::default(),
            reader: ReaderSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Tag UIDs bound to control actions. An unset UID means the action cannot
/// be triggered by a tag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActionTagSettings {
    #[serde(alias = "pause-uid")]
    pub pause_uid: Option<String>,
    #[serde(alias = "next-uid")]
    pub next_uid: Option<String>,
    #[serde(alias = "prev-uid")]
    pub prev_uid: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReaderSettings {
    /// Line-oriented device or FIFO to read UIDs from. Stdin when unset.
    pub device: Option<PathBuf>,
    /// Minimum time before the same UID is reported again (milliseconds).
    pub cooldown_ms: u64,
    /// Pause between polls while no tag is present (milliseconds).
    pub poll_interval_ms: u64,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            device: None,
            cooldown_ms: 3000,
            poll_interval_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Directory for daily-rotated log files. Logs go to stderr only when unset.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "musikbox=info,warn".to_string(),
            directory: None,
        }
    }
}
