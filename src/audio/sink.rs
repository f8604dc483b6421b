//! Creating `rodio` sinks for track files.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink};
use thiserror::Error;

#[derive(Debug, Error)]
pub(super) enum SinkError {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to decode {}: {source}", path.display())]
    Decode { path: PathBuf, source: DecoderError },
}

/// Create a paused `Sink` playing `path` from the start.
pub(super) fn create_sink(stream: &OutputStream, path: &Path) -> Result<Sink, SinkError> {
    let file = File::open(path).map_err(|source| SinkError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| SinkError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
