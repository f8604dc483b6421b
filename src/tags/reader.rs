use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Result of one poll of a tag reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll {
    /// A tag is on the reader; carries its uppercase hex UID.
    Tag(String),
    /// Nothing on the reader right now.
    Empty,
    /// The reader has gone away and will not produce further tags.
    Closed,
}

/// A source of raw tag UIDs, polled from the tag source thread.
pub trait TagReader: Send {
    fn poll(&mut self) -> io::Result<Poll>;
}

impl<T: TagReader + ?Sized> TagReader for Box<T> {
    fn poll(&mut self) -> io::Result<Poll> {
        (**self).poll()
    }
}

/// Convert a UID byte list to an uppercase hex string.
///
/// `[147, 85, 167, 43, 181]` becomes `"9355A72BB5"`.
pub fn uid_to_hex(uid: &[u8]) -> String {
    uid.iter().map(|b| format!("{b:02X}")).collect()
}

/// Parse one line of reader output into a hex UID.
///
/// Accepts a hex UID (`"9355a72bb5"`) or a list of decimal bytes separated by
/// spaces or commas (`"147, 85, 167, 43, 181"`), the form MFRC522 drivers
/// print. Returns `None` for blank or malformed lines.
pub fn parse_uid_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line.contains([' ', ',']) {
        let bytes = line
            .split([' ', ','])
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;
        return Some(uid_to_hex(&bytes));
    }

    if line.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(line.to_ascii_uppercase())
    } else {
        None
    }
}

/// Reads one UID per line from a byte stream.
///
/// Covers USB readers that emulate a keyboard, FIFOs fed by a reader driver
/// and plain stdin.
pub struct LineTagReader<R> {
    input: R,
    line: String,
}

impl<R: BufRead + Send> LineTagReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }
}

impl<R: BufRead + Send> TagReader for LineTagReader<R> {
    fn poll(&mut self) -> io::Result<Poll> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(Poll::Closed);
        }
        Ok(match parse_uid_line(&self.line) {
            Some(uid) => Poll::Tag(uid),
            None => Poll::Empty,
        })
    }
}

/// Open a line reader on `device`, or on stdin when no device is given.
pub fn open_line_reader(device: Option<&Path>) -> io::Result<Box<dyn TagReader>> {
    let reader: Box<dyn TagReader> = match device {
        Some(path) => Box::new(LineTagReader::new(BufReader::new(File::open(path)?))),
        None => Box::new(LineTagReader::new(BufReader::new(io::stdin()))),
    };
    Ok(reader)
}
