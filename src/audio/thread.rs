use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use rodio::{OutputStreamBuilder, Sink};
use tracing::{debug, error, info, warn};

use super::sink::create_sink;
use super::types::AudioCmd;

pub(super) fn spawn_audio_thread(rx: Receiver<AudioCmd>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(e) => {
                error!(error = %e, "no audio output device, playback disabled");
                // Keep accepting commands so the player never blocks on us.
                for cmd in rx.iter() {
                    if cmd == AudioCmd::Quit {
                        break;
                    }
                }
                return;
            }
        };
        // rodio logs to stderr when the stream is dropped; we log ourselves.
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;

        for cmd in rx.iter() {
            debug!(?cmd, "audio command");
            match cmd {
                AudioCmd::Load(path) => {
                    if let Some(old) = sink.take() {
                        old.stop();
                    }
                    match create_sink(&stream, &path) {
                        Ok(new_sink) => {
                            new_sink.play();
                            sink = Some(new_sink);
                        }
                        Err(e) => warn!(error = %e, "cannot play track"),
                    }
                }
                AudioCmd::Resume => {
                    if let Some(s) = sink.as_ref() {
                        s.play();
                    }
                }
                AudioCmd::Pause => {
                    if let Some(s) = sink.as_ref() {
                        s.pause();
                    }
                }
                AudioCmd::Quit => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    break;
                }
            }
        }
        info!("audio thread stopped");
    })
}
