//! Commands understood by the audio thread.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    /// Stop whatever is playing, then open and play the given file.
    Load(PathBuf),
    /// Resume the paused track.
    Resume,
    /// Pause the current track.
    Pause,
    /// Stop playback and end the audio thread.
    Quit,
}
