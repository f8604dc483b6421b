use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// musikbox: a folder-based music player driven by typed commands or RFID tags
#[derive(Parser, Debug, Default)]
#[command(name = "musikbox", version, about)]
pub struct Args {
    /// Path to the TOML config file [default: /etc/musikbox.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base path of the music library
    #[arg(long, value_name = "DIR")]
    pub music_dir: Option<PathBuf>,

    /// Run unattended, driven by the RFID tag reader
    #[arg(long)]
    pub rfid: bool,

    /// Line-oriented device or FIFO delivering tag UIDs (stdin when unset)
    #[arg(long, value_name = "PATH")]
    pub reader_device: Option<PathBuf>,

    /// Print the UID of every scanned tag, then exit (Ctrl+C to stop)
    #[arg(long)]
    pub scan: bool,

    /// Tag UID for the pause/resume action
    #[arg(long, value_name = "UID")]
    pub pause_uid: Option<String>,

    /// Tag UID for the next-title action
    #[arg(long, value_name = "UID")]
    pub next_uid: Option<String>,

    /// Tag UID for the previous-title action
    #[arg(long, value_name = "UID")]
    pub prev_uid: Option<String>,
}

impl Args {
    /// Override `settings` with every flag that was given explicitly.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.music_dir {
            settings.music_dir = dir.clone();
        }
        if self.rfid {
            settings.rfid = true;
        }
        if let Some(device) = &self.reader_device {
            settings.reader.device = Some(device.clone());
        }
        if let Some(uid) = &self.pause_uid {
            settings.action_tags.pause_uid = Some(uid.clone());
        }
        if let Some(uid) = &self.next_uid {
            settings.action_tags.next_uid = Some(uid.clone());
        }
        if let Some(uid) = &self.prev_uid {
            settings.action_tags.prev_uid = Some(uid.clone());
        }
    }
}
