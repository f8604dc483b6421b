use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};

use super::index::AlbumIndex;
use super::model::Album;

/// Audio extensions recognised when no list is configured.
pub const DEFAULT_EXTENSIONS: [&str; 8] = ["mp3", "flac", "ogg", "wav", "m4a", "aac", "wma", "opus"];

fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn album_tracks(dir: &Path, extensions: &[String]) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file() && is_audio_file(e.path(), extensions))
        .filter_map(|e| match e.file_name().to_str() {
            Some(name) => Some(name.to_string()),
            None => {
                warn!(path = %e.path().display(), "skipping track with non UTF-8 name");
                None
            }
        })
        .collect()
}

impl AlbumIndex {
    /// Scan `root` and build a fresh snapshot.
    ///
    /// Every immediate sub-directory holding at least one file whose
    /// extension (case-insensitive) is in `extensions` becomes an album.
    pub fn build(root: &Path, extensions: &[String]) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::LibraryNotFound {
                path: root.to_path_buf(),
            });
        }

        let extensions = normalize_extensions(extensions);
        let mut albums = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                warn!(path = %entry.path().display(), "skipping album folder with non UTF-8 name");
                continue;
            };

            let tracks = album_tracks(entry.path(), &extensions);
            if tracks.is_empty() {
                debug!(album = name, "skipping folder without audio files");
                continue;
            }
            albums.push(Album::new(name, entry.path().to_path_buf(), tracks));
        }

        let index = AlbumIndex::from_albums(root, albums);
        info!(root = %root.display(), albums = index.len(), "library scanned");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let extensions = normalize_extensions(&exts(&DEFAULT_EXTENSIONS));
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &extensions));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &extensions));
        assert!(is_audio_file(Path::new("/tmp/a.Opus"), &extensions));
        assert!(is_audio_file(Path::new("/tmp/a.m4a"), &extensions));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &extensions));
        assert!(!is_audio_file(Path::new("/tmp/a"), &extensions));
    }

    #[test]
    fn normalize_extensions_strips_dots_and_blanks() {
        assert_eq!(
            normalize_extensions(&exts(&[".MP3", " flac ", "", "."])),
            vec!["mp3".to_string(), "flac".to_string()]
        );
    }

    #[cfg(unix)]
    #[test]
    fn album_tracks_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("01.mp3"), b"x").unwrap();
        let bad = OsStr::from_bytes(b"02-\xff.mp3");
        if std::fs::write(dir.path().join(bad), b"x").is_err() {
            // Some filesystems refuse invalid UTF-8 names outright.
            return;
        }

        let extensions = normalize_extensions(&exts(&["mp3"]));
        assert_eq!(album_tracks(dir.path(), &extensions), vec!["01.mp3".to_string()]);
    }
}
