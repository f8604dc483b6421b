//! Error types shared by the library scanner, the player and the runtime.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The configured music directory is missing or is not a directory.
    #[error("music library not found: {}", path.display())]
    LibraryNotFound { path: PathBuf },

    /// A playback operation was attempted from a state that does not allow it.
    /// The player state is left untouched.
    #[error("{action}() is not allowed in state {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// The named album is not part of the current library snapshot.
    #[error("album not found: {0}")]
    AlbumNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
