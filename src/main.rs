use std::process::ExitCode;

mod audio;
mod config;
mod error;
mod library;
mod logging;
mod player;
mod runtime;
mod tags;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    runtime::run()
}
