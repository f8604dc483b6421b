use crate::library::Album;

use super::host::PlaybackHost;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostCall {
    LoadAndPlay { album: String, title: String },
    Resume,
    Pause,
}

/// Records every host command for assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl PlaybackHost for RecordingHost {
    fn load_and_play(&mut self, album: &Album, title_index: usize) {
        self.calls.push(HostCall::LoadAndPlay {
            album: album.name.clone(),
            title: album.tracks[title_index].clone(),
        });
    }

    fn resume(&mut self) {
        self.calls.push(HostCall::Resume);
    }

    fn pause(&mut self) {
        self.calls.push(HostCall::Pause);
    }
}
