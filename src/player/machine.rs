use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::library::{AlbumIndex, normalize_uid};
use crate::tags::{Action, Resolution, TagResolver};

use super::host::PlaybackHost;
use super::state::PlayerState;

/// What `Player::on_rfid_scan` did with a UID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Same UID as the last accepted scan; nothing happened.
    Duplicate,
    /// The UID is neither an action tag nor bound to an album.
    Unresolved,
    Handled(Resolution),
}

/// The playback state machine.
///
/// Every operation checks its precondition first, then emits exactly one
/// host command and commits the new state. A failed precondition returns an
/// error without touching the state or the host.
pub struct Player<H> {
    index: Arc<AlbumIndex>,
    resolver: TagResolver,
    host: H,
    state: PlayerState,
    last_uid: Option<String>,
}

impl<H: PlaybackHost> Player<H> {
    pub fn new(index: Arc<AlbumIndex>, resolver: TagResolver, host: H) -> Self {
        Self {
            index,
            resolver,
            host,
            state: PlayerState::Idle,
            last_uid: None,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn current_album(&self) -> Option<&str> {
        self.state.album()
    }

    pub fn current_title_index(&self) -> Option<usize> {
        self.state.title_index()
    }

    /// File name of the active track.
    pub fn current_title(&self) -> Option<&str> {
        let album = self.index.lookup_by_name(self.state.album()?)?;
        album.track(self.state.title_index()?)
    }

    pub fn last_uid(&self) -> Option<&str> {
        self.last_uid.as_deref()
    }

    pub fn list_albums(&self) -> Vec<&str> {
        self.index.list_albums()
    }

    pub fn index(&self) -> &AlbumIndex {
        &self.index
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Start `album` from its first track, or resume the loaded album when
    /// `album` is `None`.
    pub fn play(&mut self, album: Option<&str>) -> Result<()> {
        match album {
            Some(name) => self.play_album(name),
            None => self.resume(),
        }
    }

    /// Load `name` and play its first track. Switching albums always starts
    /// over at the first track.
    pub fn play_album(&mut self, name: &str) -> Result<()> {
        let album = self
            .index
            .lookup_by_name(name)
            .ok_or_else(|| Error::AlbumNotFound(name.to_string()))?;

        self.host.load_and_play(album, 0);
        info!(album = %album.name, title = album.track(0), "playing album");
        self.state = PlayerState::Playing {
            album: album.name.clone(),
            title_index: 0,
        };
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        let PlayerState::Playing { album, title_index } = &self.state else {
            return Err(self.invalid("pause"));
        };
        let (album, title_index) = (album.clone(), *title_index);

        self.host.pause();
        info!(album = %album, title_index, "paused");
        self.state = PlayerState::Paused { album, title_index };
        Ok(())
    }

    /// Pause when playing, resume when paused.
    pub fn toggle_pause(&mut self) -> Result<()> {
        match self.state {
            PlayerState::Playing { .. } => self.pause(),
            PlayerState::Paused { .. } => self.resume(),
            PlayerState::Idle => Err(self.invalid("toggle_pause")),
        }
    }

    /// Advance to the next track, wrapping to the first. Starts playback
    /// when paused.
    pub fn next_title(&mut self) -> Result<()> {
        self.step("next_title", true)
    }

    /// Go back to the previous track, wrapping to the last. Starts playback
    /// when paused.
    pub fn previous_title(&mut self) -> Result<()> {
        self.step("previous_title", false)
    }

    /// Handle a raw UID from the tag reader.
    ///
    /// A repeat of the last accepted UID is ignored so a tag left on the
    /// reader does not restart its album. `last_uid` only moves when the
    /// dispatched operation succeeds.
    pub fn on_rfid_scan(&mut self, raw_uid: &str) -> Result<ScanOutcome> {
        let uid = normalize_uid(raw_uid);
        if self.last_uid.as_deref() == Some(uid.as_str()) {
            debug!(uid = %uid, "ignoring repeated scan");
            return Ok(ScanOutcome::Duplicate);
        }

        let resolution = self.resolver.resolve(&uid);
        match &resolution {
            Resolution::Unresolved => {
                info!(uid = %uid, "unknown tag");
                return Ok(ScanOutcome::Unresolved);
            }
            Resolution::Action(Action::Pause) => self.toggle_pause()?,
            Resolution::Action(Action::Next) => self.next_title()?,
            Resolution::Action(Action::Previous) => self.previous_title()?,
            Resolution::Album(name) => self.play_album(name)?,
        }

        debug!(uid = %uid, ?resolution, "scan handled");
        self.last_uid = Some(uid);
        Ok(ScanOutcome::Handled(resolution))
    }

    fn resume(&mut self) -> Result<()> {
        let (album, title_index) = self.loaded("play")?;

        self.host.resume();
        info!(album = %album, title_index, "resumed");
        self.state = PlayerState::Playing { album, title_index };
        Ok(())
    }

    fn step(&mut self, action: &'static str, forward: bool) -> Result<()> {
        let (name, current) = self.loaded(action)?;
        let album = self
            .index
            .lookup_by_name(&name)
            .ok_or_else(|| Error::AlbumNotFound(name.clone()))?;

        // Indexed albums always have at least one track.
        let count = album.track_count();
        let title_index = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };

        self.host.load_and_play(album, title_index);
        info!(album = %name, title = album.track(title_index), action, "changed title");
        self.state = PlayerState::Playing {
            album: name,
            title_index,
        };
        Ok(())
    }

    fn loaded(&self, action: &'static str) -> Result<(String, usize)> {
        match &self.state {
            PlayerState::Paused { album, title_index } | PlayerState::Playing { album, title_index } => {
                Ok((album.clone(), *title_index))
            }
            PlayerState::Idle => Err(self.invalid(action)),
        }
    }

    fn invalid(&self, action: &'static str) -> Error {
        Error::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}
