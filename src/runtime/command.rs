/// Input for the command loop, typed by the user or produced by the tag source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Albums,
    /// Play the named album, or resume the loaded one.
    Play(Option<String>),
    Pause,
    Toggle,
    Next,
    Prev,
    /// A UID typed at the prompt, for testing without hardware.
    Scan(String),
    /// A UID from the tag reader.
    Tag(String),
    Status,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str =
    "Available commands: albums, play [album], pause, toggle, next, prev, scan <uid>, status, help, quit";

/// Parse one typed line. Blank lines yield `None`.
///
/// The command word is case-insensitive; the album name after `play` is kept
/// verbatim (minus surrounding whitespace) since folder names may contain spaces.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (line, None),
    };

    let cmd = match word.to_lowercase().as_str() {
        "albums" => Command::Albums,
        "play" => Command::Play(arg.map(str::to_string)),
        "pause" => Command::Pause,
        "toggle" => Command::Toggle,
        "next" => Command::Next,
        "prev" | "previous" => Command::Prev,
        "scan" => match arg {
            Some(uid) => Command::Scan(uid.to_string()),
            None => Command::Unknown(line.to_string()),
        },
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    };
    Some(cmd)
}
