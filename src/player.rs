//! Playback state machine.
//!
//! `Player` owns the playback state, validates every transition against it
//! and tells a `PlaybackHost` what to do. It is not internally synchronized:
//! the runtime keeps it on a single command loop thread and feeds typed
//! commands and scanned tags to it through one channel.

mod host;
mod machine;
mod state;

pub use host::*;
pub use machine::*;
pub use state::*;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests;
