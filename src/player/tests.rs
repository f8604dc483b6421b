use std::path::PathBuf;
use std::sync::Arc;

use super::testing::{HostCall, RecordingHost};
use super::*;
use crate::error::Error;
use crate::library::{Album, AlbumIndex};
use crate::tags::{Action, ActionBindings, Resolution, TagResolver};

fn album(name: &str, tracks: &[&str]) -> Album {
    Album::new(
        name,
        PathBuf::from("/music").join(name),
        tracks.iter().map(|t| t.to_string()).collect(),
    )
}

fn player_with(albums: Vec<Album>, bindings: ActionBindings) -> Player<RecordingHost> {
    let index = Arc::new(AlbumIndex::from_albums("/music", albums));
    let resolver = TagResolver::new(index.clone(), bindings);
    Player::new(index, resolver, RecordingHost::default())
}

fn player() -> Player<RecordingHost> {
    player_with(
        vec![
            album("Album A", &["01 - First.mp3", "02 - Second.mp3", "03 - Third.mp3"]),
            album("Album B", &["track1.flac", "track2.flac"]),
            album("CAFE Single", &["only.ogg"]),
        ],
        ActionBindings::new(Some("AABBCCDD"), Some("11223344"), Some("55667788")),
    )
}

fn load(album: &str, title: &str) -> HostCall {
    HostCall::LoadAndPlay {
        album: album.into(),
        title: title.into(),
    }
}

fn assert_invalid(result: crate::error::Result<()>, expected_action: &str) {
    match result {
        Err(Error::InvalidTransition { action, state }) => {
            assert_eq!(action, expected_action);
            assert_eq!(state, "IDLE");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
}

// Initial state

#[test]
fn starts_idle_without_album() {
    let p = player();
    assert_eq!(p.state(), &PlayerState::Idle);
    assert_eq!(p.state().status(), PlaybackStatus::Paused);
    assert_eq!(p.current_album(), None);
    assert_eq!(p.current_title(), None);
    assert_eq!(p.last_uid(), None);
    assert_eq!(p.list_albums(), vec!["Album A", "Album B", "CAFE Single"]);
}

// Without an album loaded

#[test]
fn play_album_from_idle_starts_first_title() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_album(), Some("Album A"));
    assert_eq!(p.current_title(), Some("01 - First.mp3"));
    assert_eq!(p.host().calls, vec![load("Album A", "01 - First.mp3")]);
}

#[test]
fn operations_needing_an_album_fail_when_idle() {
    let mut p = player();
    assert_invalid(p.play(None), "play");
    assert_invalid(p.pause(), "pause");
    assert_invalid(p.next_title(), "next_title");
    assert_invalid(p.previous_title(), "previous_title");
    assert_invalid(p.toggle_pause(), "toggle_pause");

    assert_eq!(p.state(), &PlayerState::Idle);
    assert!(p.host().calls.is_empty());
}

#[test]
fn play_unknown_album_leaves_state_unchanged() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.next_title().unwrap();

    match p.play(Some("Does Not Exist")) {
        Err(Error::AlbumNotFound(name)) => assert_eq!(name, "Does Not Exist"),
        other => panic!("expected AlbumNotFound, got {other:?}"),
    }
    assert_eq!(
        p.state(),
        &PlayerState::Playing {
            album: "Album A".into(),
            title_index: 1
        }
    );
    assert_eq!(p.host().calls.len(), 2);
}

// While playing

#[test]
fn next_and_previous_title() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.next_title().unwrap();
    assert_eq!(p.current_title(), Some("02 - Second.mp3"));
    p.previous_title().unwrap();
    assert_eq!(p.current_title(), Some("01 - First.mp3"));
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
}

#[test]
fn next_title_cycles_back_to_start() {
    let mut p = player();
    for name in ["Album A", "Album B", "CAFE Single"] {
        p.play(Some(name)).unwrap();
        let tracks = p.index().lookup_by_name(name).unwrap().track_count();
        for _ in 0..tracks {
            p.next_title().unwrap();
        }
        assert_eq!(p.current_title_index(), Some(0), "album {name}");
    }
}

#[test]
fn previous_from_first_title_wraps_to_last() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.previous_title().unwrap();
    assert_eq!(p.current_title_index(), Some(2));
    assert_eq!(p.current_title(), Some("03 - Third.mp3"));
}

#[test]
fn single_track_album_repeats() {
    let mut p = player();
    p.play(Some("CAFE Single")).unwrap();
    p.next_title().unwrap();
    p.previous_title().unwrap();
    assert_eq!(p.current_title(), Some("only.ogg"));
    assert_eq!(
        p.host().calls,
        vec![
            load("CAFE Single", "only.ogg"),
            load("CAFE Single", "only.ogg"),
            load("CAFE Single", "only.ogg"),
        ]
    );
}

#[test]
fn pause_keeps_album_and_title() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.pause().unwrap();
    assert_eq!(
        p.state(),
        &PlayerState::Paused {
            album: "Album A".into(),
            title_index: 0
        }
    );
    assert_eq!(p.current_title(), Some("01 - First.mp3"));
    assert_eq!(p.host().calls.last(), Some(&HostCall::Pause));
}

#[test]
fn switching_album_while_playing_resets_title() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.next_title().unwrap();
    p.next_title().unwrap();
    p.play(Some("Album B")).unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_album(), Some("Album B"));
    assert_eq!(p.current_title(), Some("track1.flac"));

    p.play(Some("Album A")).unwrap();
    assert_eq!(p.current_title(), Some("01 - First.mp3"));
}

#[test]
fn replaying_the_current_album_restarts_it() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.next_title().unwrap();
    p.play(Some("Album A")).unwrap();
    assert_eq!(p.current_title_index(), Some(0));
}

// While paused

#[test]
fn resume_continues_at_current_title() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.next_title().unwrap();
    p.pause().unwrap();
    p.play(None).unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_title(), Some("02 - Second.mp3"));
    assert_eq!(p.host().calls.last(), Some(&HostCall::Resume));
}

#[test]
fn switch_album_from_paused() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.next_title().unwrap();
    p.pause().unwrap();
    p.play(Some("Album B")).unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_album(), Some("Album B"));
    assert_eq!(p.current_title_index(), Some(0));
}

#[test]
fn next_and_previous_from_paused_start_playing() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.pause().unwrap();
    p.next_title().unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_title(), Some("02 - Second.mp3"));

    p.pause().unwrap();
    p.previous_title().unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_title(), Some("01 - First.mp3"));
}

#[test]
fn pause_from_paused_fails_without_side_effects() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    p.pause().unwrap();
    let before = p.state().clone();
    let calls = p.host().calls.len();

    match p.pause() {
        Err(Error::InvalidTransition { action, state }) => {
            assert_eq!(action, "pause");
            assert_eq!(state, "PAUSED");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
    assert_eq!(p.state(), &before);
    assert_eq!(p.host().calls.len(), calls);
}

#[test]
fn toggle_pause_flips_between_playing_and_paused() {
    let mut p = player();
    p.play(Some("Album B")).unwrap();
    p.toggle_pause().unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Paused);
    p.toggle_pause().unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(
        p.host().calls,
        vec![load("Album B", "track1.flac"), HostCall::Pause, HostCall::Resume]
    );
}

// Tag scans

#[test]
fn scan_album_tag_plays_album() {
    let mut p = player();
    let outcome = p.on_rfid_scan("cafe").unwrap();
    assert_eq!(outcome, ScanOutcome::Handled(Resolution::Album("CAFE Single".into())));
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_album(), Some("CAFE Single"));
    assert_eq!(p.last_uid(), Some("CAFE"));
}

#[test]
fn repeated_scan_is_a_single_transition() {
    let mut p = player();
    p.on_rfid_scan("CAFE").unwrap();
    let state = p.state().clone();
    let title = p.current_title().map(str::to_string);

    assert_eq!(p.on_rfid_scan("cafe").unwrap(), ScanOutcome::Duplicate);
    assert_eq!(p.state(), &state);
    assert_eq!(p.current_title().map(str::to_string), title);
    assert_eq!(p.host().calls.len(), 1);
}

#[test]
fn repeated_action_scan_is_ignored_until_another_tag() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();

    p.on_rfid_scan("11223344").unwrap();
    assert_eq!(p.on_rfid_scan("11223344").unwrap(), ScanOutcome::Duplicate);
    assert_eq!(p.current_title_index(), Some(1));

    p.on_rfid_scan("55667788").unwrap();
    p.on_rfid_scan("11223344").unwrap();
    assert_eq!(p.current_title_index(), Some(1));
}

#[test]
fn pause_tag_toggles() {
    let mut p = player();
    p.play(Some("Album A")).unwrap();
    assert_eq!(
        p.on_rfid_scan("aabbccdd").unwrap(),
        ScanOutcome::Handled(Resolution::Action(Action::Pause))
    );
    assert_eq!(p.state().status(), PlaybackStatus::Paused);

    p.on_rfid_scan("CAFE").unwrap();
    p.pause().unwrap();
    p.on_rfid_scan("AABBCCDD").unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
}

#[test]
fn unresolved_scan_changes_nothing() {
    let mut p = player();
    assert_eq!(p.on_rfid_scan("DEADBEEF").unwrap(), ScanOutcome::Unresolved);
    assert_eq!(p.state(), &PlayerState::Idle);
    assert_eq!(p.last_uid(), None);
    assert!(p.host().calls.is_empty());
}

#[test]
fn failed_action_scan_does_not_record_uid() {
    let mut p = player();
    assert_invalid(p.on_rfid_scan("11223344").map(|_| ()), "next_title");
    assert_eq!(p.last_uid(), None);
    assert_eq!(p.state(), &PlayerState::Idle);
}

#[test]
fn action_uid_wins_over_album_with_same_prefix() {
    let mut p = player_with(
        vec![
            album("AABBCCDD Shadowed", &["s.mp3"]),
            album("Album B", &["track1.flac"]),
        ],
        ActionBindings::new(Some("aabbccdd"), None, None),
    );
    p.play(Some("Album B")).unwrap();

    assert_eq!(
        p.on_rfid_scan("AABBCCDD").unwrap(),
        ScanOutcome::Handled(Resolution::Action(Action::Pause))
    );
    assert_eq!(p.current_album(), Some("Album B"));
    assert_eq!(p.state().status(), PlaybackStatus::Paused);
}

#[test]
fn scenario_album_with_uid_prefix() {
    let mut p = player_with(
        vec![
            album("AAAA Album1", &["01.mp3", "02.mp3"]),
            album("Album2", &["a.flac"]),
        ],
        ActionBindings::default(),
    );
    assert_eq!(p.state(), &PlayerState::Idle);

    p.play(Some("Album1")).unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_title(), Some("01.mp3"));

    p.next_title().unwrap();
    assert_eq!(p.current_title(), Some("02.mp3"));

    p.next_title().unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_title(), Some("01.mp3"));

    p.pause().unwrap();
    assert_eq!(p.state().status(), PlaybackStatus::Paused);
    assert_eq!(p.current_title(), Some("01.mp3"));

    assert_eq!(
        p.on_rfid_scan("aaaa").unwrap(),
        ScanOutcome::Handled(Resolution::Album("AAAA Album1".into()))
    );
    assert_eq!(p.state().status(), PlaybackStatus::Playing);
    assert_eq!(p.current_title_index(), Some(0));

    p.pause().unwrap();
    assert_eq!(p.on_rfid_scan("AAAA").unwrap(), ScanOutcome::Duplicate);
    assert_eq!(p.state().status(), PlaybackStatus::Paused);
}
