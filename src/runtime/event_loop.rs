use std::io::{self, Write};
use std::sync::mpsc::Receiver;

use tracing::warn;

use crate::error::Result;
use crate::player::{PlaybackHost, Player, ScanOutcome};
use crate::tags::Resolution;

use super::command::{Command, HELP};

const PROMPT: &str = "musikbox> ";

/// Whether the loop keeps running after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The single owner of the player: applies commands from `rx` one at a time
/// until a `Quit` arrives or every sender hangs up.
///
/// With `prompt` set, a prompt is written before each typed command. Tags
/// from the reader arrive unprompted and leave the prompt alone.
pub fn run<H, W>(player: &mut Player<H>, rx: &Receiver<Command>, out: &mut W, prompt: bool) -> io::Result<()>
where
    H: PlaybackHost,
    W: Write,
{
    if prompt {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    for cmd in rx.iter() {
        let from_tag = matches!(cmd, Command::Tag(_));
        if handle(player, cmd, out)? == Flow::Quit {
            break;
        }
        if prompt && !from_tag {
            write!(out, "{PROMPT}")?;
        }
        out.flush()?;
    }
    Ok(())
}

/// Apply one command and write its feedback to `out`.
pub fn handle<H, W>(player: &mut Player<H>, cmd: Command, out: &mut W) -> io::Result<Flow>
where
    H: PlaybackHost,
    W: Write,
{
    match cmd {
        Command::Albums => {
            for album in player.list_albums() {
                writeln!(out, "  {album}")?;
            }
        }
        Command::Play(album) => {
            let result = player.play(album.as_deref());
            report(out, player, result)?;
        }
        Command::Pause => {
            let result = player.pause();
            report(out, player, result)?;
        }
        Command::Toggle => {
            let result = player.toggle_pause();
            report(out, player, result)?;
        }
        Command::Next => {
            let result = player.next_title();
            report(out, player, result)?;
        }
        Command::Prev => {
            let result = player.previous_title();
            report(out, player, result)?;
        }
        Command::Scan(uid) | Command::Tag(uid) => match player.on_rfid_scan(&uid) {
            Ok(ScanOutcome::Handled(Resolution::Action(action))) => {
                writeln!(out, "  RFID: {action}")?;
                print_status(out, player)?;
            }
            Ok(ScanOutcome::Handled(_)) => print_status(out, player)?,
            Ok(ScanOutcome::Duplicate) => {}
            Ok(ScanOutcome::Unresolved) => writeln!(out, "  RFID: unknown tag {}", uid.trim())?,
            Err(e) => {
                warn!(uid = %uid.trim(), error = %e, "scan rejected");
                writeln!(out, "  RFID: {e}")?;
            }
        },
        Command::Status => {
            print_status(out, player)?;
            writeln!(out, "  playback: {:?}", player.state().status())?;
            if let Some(uid) = player.last_uid() {
                writeln!(out, "  last tag: {uid}")?;
            }
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(Flow::Quit),
        Command::Unknown(word) => writeln!(out, "  Unknown command: {word}")?,
    }
    Ok(Flow::Continue)
}

fn report<H, W>(out: &mut W, player: &Player<H>, result: Result<()>) -> io::Result<()>
where
    H: PlaybackHost,
    W: Write,
{
    match result {
        Ok(()) => print_status(out, player),
        Err(e) => {
            warn!(error = %e, "command rejected");
            writeln!(out, "  Error: {e}")
        }
    }
}

fn print_status<H, W>(out: &mut W, player: &Player<H>) -> io::Result<()>
where
    H: PlaybackHost,
    W: Write,
{
    writeln!(
        out,
        "  [{}]  album: {}  title: {}",
        player.state(),
        player.current_album().unwrap_or("-"),
        player.current_title().unwrap_or("-"),
    )
}
