use std::fmt;
use std::sync::Arc;

use crate::library::{AlbumIndex, normalize_uid};

/// A playback control that can be bound to a tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggle between playing and paused.
    Pause,
    Next,
    Previous,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pause => write!(f, "pause"),
            Action::Next => write!(f, "next"),
            Action::Previous => write!(f, "previous"),
        }
    }
}

/// What a scanned UID means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Action(Action),
    /// Folder name of the bound album.
    Album(String),
    Unresolved,
}

/// UIDs bound to control actions. Stored normalized; blank UIDs count as unbound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBindings {
    pause: Option<String>,
    next: Option<String>,
    previous: Option<String>,
}

impl ActionBindings {
    pub fn new(pause: Option<&str>, next: Option<&str>, previous: Option<&str>) -> Self {
        let bind = |uid: Option<&str>| uid.map(normalize_uid).filter(|u| !u.is_empty());
        Self {
            pause: bind(pause),
            next: bind(next),
            previous: bind(previous),
        }
    }

    /// The action bound to an already normalized `uid`.
    fn action_for(&self, uid: &str) -> Option<Action> {
        [
            (&self.pause, Action::Pause),
            (&self.next, Action::Next),
            (&self.previous, Action::Previous),
        ]
        .into_iter()
        .find(|(bound, _)| bound.as_deref() == Some(uid))
        .map(|(_, action)| action)
    }
}

/// Maps scanned UIDs to actions or albums.
///
/// Action bindings always win over album UIDs, so a control tag keeps working
/// even if some album folder happens to carry the same prefix.
#[derive(Debug, Clone)]
pub struct TagResolver {
    index: Arc<AlbumIndex>,
    bindings: ActionBindings,
}

impl TagResolver {
    pub fn new(index: Arc<AlbumIndex>, bindings: ActionBindings) -> Self {
        Self { index, bindings }
    }

    pub fn resolve(&self, uid: &str) -> Resolution {
        let uid = normalize_uid(uid);
        if uid.is_empty() {
            return Resolution::Unresolved;
        }

        if let Some(action) = self.bindings.action_for(&uid) {
            return Resolution::Action(action);
        }

        match self.index.lookup_by_uid(&uid) {
            Some(album) => Resolution::Album(album.name.clone()),
            None => Resolution::Unresolved,
        }
    }
}
