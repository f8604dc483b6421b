use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::model::{Album, normalize_uid};

/// Immutable snapshot of the music library.
///
/// Albums are kept sorted by folder name. Re-scanning builds a new index; an
/// existing one is never mutated.
#[derive(Debug, Clone, Default)]
pub struct AlbumIndex {
    root: PathBuf,
    albums: Vec<Album>,
    by_name: HashMap<String, usize>,
    by_uid: HashMap<String, usize>,
}

impl AlbumIndex {
    /// Build an index from already-enumerated albums.
    ///
    /// Albums without tracks are dropped. When two folders carry the same UID
    /// the lexicographically first folder name owns it.
    pub fn from_albums(root: impl Into<PathBuf>, albums: impl IntoIterator<Item = Album>) -> Self {
        let mut albums: Vec<Album> = albums
            .into_iter()
            .filter(|a| !a.tracks.is_empty())
            .collect();
        albums.sort_by(|a, b| a.name.cmp(&b.name));
        albums.dedup_by(|a, b| a.name == b.name);

        let mut by_name = HashMap::with_capacity(albums.len());
        let mut by_uid = HashMap::new();
        for (i, album) in albums.iter().enumerate() {
            by_name.insert(album.name.clone(), i);
            if let Some(uid) = &album.uid {
                if let Some(&owner) = by_uid.get(uid) {
                    let owner: &Album = &albums[owner];
                    warn!(
                        uid = %uid,
                        kept = %owner.name,
                        ignored = %album.name,
                        "duplicate album UID"
                    );
                } else {
                    by_uid.insert(uid.clone(), i);
                }
            }
        }

        Self {
            root: root.into(),
            albums,
            by_name,
            by_uid,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Find an album by folder name, falling back to its title when exactly
    /// one album carries it (`"Album1"` finds `"AAAA Album1"`).
    pub fn lookup_by_name(&self, name: &str) -> Option<&Album> {
        if let Some(&i) = self.by_name.get(name) {
            return Some(&self.albums[i]);
        }

        let mut matches = self.albums.iter().filter(|a| a.title == name);
        match (matches.next(), matches.next()) {
            (Some(album), None) => Some(album),
            _ => None,
        }
    }

    /// Find the album bound to `uid` (case-insensitive).
    pub fn lookup_by_uid(&self, uid: &str) -> Option<&Album> {
        self.by_uid
            .get(&normalize_uid(uid))
            .map(|&i| &self.albums[i])
    }

    /// Folder names in index order.
    pub fn list_albums(&self) -> Vec<&str> {
        self.albums.iter().map(|a| a.name.as_str()).collect()
    }
}
