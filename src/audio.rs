//! Audio playback host.
//!
//! `AudioPlayer` implements `PlaybackHost` by forwarding commands to a
//! dedicated thread that owns the `rodio` output stream and sink.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::AudioCmd;

#[cfg(test)]
mod tests;
