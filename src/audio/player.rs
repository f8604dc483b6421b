use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

use tracing::warn;

use crate::library::Album;
use crate::player::PlaybackHost;

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    join: Option<JoinHandle<()>>,
}

impl AudioPlayer {
    /// Spawn the audio thread.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let audio_handle = spawn_audio_thread(rx);

        Self {
            tx,
            join: Some(audio_handle),
        }
    }

    #[cfg(test)]
    pub(super) fn detached(tx: Sender<AudioCmd>) -> Self {
        Self { tx, join: None }
    }

    fn send(&self, cmd: AudioCmd) {
        if self.tx.send(cmd).is_err() {
            warn!("audio thread is gone, dropping command");
        }
    }

    /// Stop playback and wait for the audio thread to finish.
    pub fn shutdown(mut self) {
        self.send(AudioCmd::Quit);
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

impl PlaybackHost for AudioPlayer {
    fn load_and_play(&mut self, album: &Album, title_index: usize) {
        match album.track_path(title_index) {
            Some(path) => self.send(AudioCmd::Load(path)),
            None => warn!(album = %album.name, title_index, "no such track"),
        }
    }

    fn resume(&mut self) {
        self.send(AudioCmd::Resume);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }
}
