use std::path::PathBuf;
use std::sync::mpsc;

use super::*;
use crate::library::Album;
use crate::player::PlaybackHost;

#[test]
fn host_commands_are_forwarded_to_the_audio_thread() {
    let (tx, rx) = mpsc::channel();
    let mut player = AudioPlayer::detached(tx);
    let album = Album::new(
        "Album A",
        PathBuf::from("/music/Album A"),
        vec!["02.mp3".into(), "01.mp3".into()],
    );

    player.load_and_play(&album, 1);
    player.pause();
    player.resume();
    player.load_and_play(&album, 7);
    player.shutdown();

    let sent: Vec<AudioCmd> = rx.iter().collect();
    assert_eq!(
        sent,
        vec![
            AudioCmd::Load(PathBuf::from("/music/Album A/02.mp3")),
            AudioCmd::Pause,
            AudioCmd::Resume,
            AudioCmd::Quit,
        ]
    );
}

#[test]
fn commands_after_the_thread_is_gone_are_dropped() {
    let (tx, rx) = mpsc::channel();
    drop(rx);
    let mut player = AudioPlayer::detached(tx);
    player.pause();
    player.resume();
}
