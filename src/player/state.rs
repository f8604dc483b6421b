use std::fmt;

/// Player state. Album and title only exist in the variants where one is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// Paused with no album loaded; the start state.
    #[default]
    Idle,
    Paused { album: String, title_index: usize },
    Playing { album: String, title_index: usize },
}

/// Coarse two-state view of `PlayerState`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    Paused,
    Playing,
}

impl PlayerState {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerState::Idle => "IDLE",
            PlayerState::Paused { .. } => "PAUSED",
            PlayerState::Playing { .. } => "PLAYING",
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        match self {
            PlayerState::Playing { .. } => PlaybackStatus::Playing,
            PlayerState::Idle | PlayerState::Paused { .. } => PlaybackStatus::Paused,
        }
    }

    pub fn album(&self) -> Option<&str> {
        match self {
            PlayerState::Idle => None,
            PlayerState::Paused { album, .. } | PlayerState::Playing { album, .. } => Some(album.as_str()),
        }
    }

    pub fn title_index(&self) -> Option<usize> {
        match self {
            PlayerState::Idle => None,
            PlayerState::Paused { title_index, .. } | PlayerState::Playing { title_index, .. } => {
                Some(*title_index)
            }
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
