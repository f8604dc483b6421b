use crate::library::Album;

/// Receives the side effects of player transitions.
///
/// Commands are fire-and-forget: a host never reports back into the player,
/// so an audio failure cannot make a transition fail half way.
pub trait PlaybackHost {
    /// Load the track at `title_index` of `album` and start playing it.
    fn load_and_play(&mut self, album: &Album, title_index: usize);
    fn resume(&mut self);
    fn pause(&mut self);
}
