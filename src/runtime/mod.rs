use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use clap::Parser;
use tracing::{info, warn};

use crate::audio::AudioPlayer;
use crate::config::{self, resolve_config_path};
use crate::logging;
use crate::tags::{open_line_reader, spawn_tag_source};

mod cli;
mod command;
mod event_loop;
mod settings;
mod startup;


use cli::Args;
use command::{Command, HELP, parse_command};

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (mut settings, fallback) = settings::load_settings(args.config.as_deref());
    args.apply(&mut settings);

    let _log_guard = logging::init_logging(&settings.logging)?;
    if let Some(msg) = fallback {
        warn!("{msg}");
    }
    info!(
        config = %resolve_config_path(args.config.as_deref()).display(),
        music_dir = %settings.music_dir.display(),
        rfid = settings.rfid,
        "musikbox starting"
    );

    if args.scan {
        run_scan_mode(&settings)?;
        return Ok(ExitCode::SUCCESS);
    }

    let index = startup::load_index(&settings)?;
    let mut out = io::stdout();
    if index.is_empty() {
        writeln!(out, "No albums found in {}", settings.music_dir.display())?;
        return Ok(ExitCode::FAILURE);
    }

    let mut player = startup::build_player(index, &settings, AudioPlayer::new());
    let (tx, rx) = mpsc::channel::<Command>();

    if settings.rfid {
        let reader = open_line_reader(settings.reader.device.as_deref())?;
        spawn_tag_source(reader, &settings.reader, move |uid| {
            tx.send(Command::Tag(uid)).is_ok()
        });
        writeln!(out, "musikbox - running in RFID mode (Ctrl+C to stop)")?;
        event_loop::run(&mut player, &rx, &mut out, false)?;
    } else {
        spawn_stdin_commands(tx);
        writeln!(out, "musikbox - interactive mode")?;
        writeln!(out, "{HELP}")?;
        writeln!(out)?;
        event_loop::run(&mut player, &rx, &mut out, true)?;
    }

    info!("shutting down");
    player.into_host().shutdown();
    Ok(ExitCode::SUCCESS)
}

/// Print the UID of every debounced tag until the reader closes.
fn run_scan_mode(settings: &config::Settings) -> Result<(), Box<dyn std::error::Error>> {
    println!("Hold an RFID tag to the reader...");
    println!("Press Ctrl+C to stop.\n");

    let reader = open_line_reader(settings.reader.device.as_deref())?;
    let handle = spawn_tag_source(reader, &settings.reader, |uid| {
        println!("  UID: {uid}");
        true
    });
    handle.join().map_err(|_| "tag source thread panicked")?;
    Ok(())
}

/// Forward typed lines to the command loop. EOF on stdin counts as `quit`.
fn spawn_stdin_commands(tx: Sender<Command>) -> JoinHandle<()> {
    thread::spawn(move || {
        for line in io::stdin().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "cannot read stdin");
                    break;
                }
            };
            if let Some(cmd) = parse_command(&line) {
                let quit = cmd == Command::Quit;
                if tx.send(cmd).is_err() || quit {
                    return;
                }
            }
        }
        let _ = tx.send(Command::Quit);
    })
}
