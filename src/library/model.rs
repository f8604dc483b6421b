use std::path::PathBuf;

/// A folder of recognised audio files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Folder name; unique within one index.
    pub name: String,
    /// Folder name without the UID token (same as `name` when there is none).
    pub title: String,
    /// Uppercase tag UID parsed from the folder name.
    pub uid: Option<String>,
    pub path: PathBuf,
    /// Track file names in case-sensitive lexicographic order. Never empty
    /// for albums held by an `AlbumIndex`.
    pub tracks: Vec<String>,
}

impl Album {
    pub fn new(name: impl Into<String>, path: PathBuf, mut tracks: Vec<String>) -> Self {
        let name = name.into();
        tracks.sort();

        let (uid, title) = match split_uid_prefix(&name) {
            Some((token, rest)) => {
                let rest = rest.trim();
                let title = if rest.is_empty() { name.clone() } else { rest.to_string() };
                (Some(normalize_uid(token)), title)
            }
            None => (None, name.clone()),
        };

        Self {
            name,
            title,
            uid,
            path,
            tracks,
        }
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn track(&self, index: usize) -> Option<&str> {
        self.tracks.get(index).map(String::as_str)
    }

    /// Full path of the track at `index`.
    pub fn track_path(&self, index: usize) -> Option<PathBuf> {
        self.tracks.get(index).map(|t| self.path.join(t))
    }
}

/// Normalize a raw tag UID for comparison: surrounding whitespace is dropped
/// and letters are uppercased.
pub fn normalize_uid(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Split `"<hex> <rest>"` into its UID token and the remainder.
///
/// Matches `^[0-9A-Fa-f]+ .+$`: the token must be non-empty hex and something
/// must follow the first space.
pub(crate) fn split_uid_prefix(folder: &str) -> Option<(&str, &str)> {
    let (token, rest) = folder.split_once(' ')?;
    if token.is_empty() || rest.is_empty() || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some((token, rest))
}
