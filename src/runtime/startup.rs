use std::sync::Arc;

use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::library::AlbumIndex;
use crate::player::{PlaybackHost, Player};
use crate::tags::{ActionBindings, TagResolver};

pub fn load_index(settings: &Settings) -> Result<Arc<AlbumIndex>> {
    let index = AlbumIndex::build(&settings.music_dir, &settings.library.extensions)?;
    info!(root = %index.root().display(), albums = index.len(), "library ready");
    Ok(Arc::new(index))
}

/// Wire the resolver and the player around a library snapshot.
pub fn build_player<H: PlaybackHost>(index: Arc<AlbumIndex>, settings: &Settings, host: H) -> Player<H> {
    let tags = &settings.action_tags;
    let bindings = ActionBindings::new(
        tags.pause_uid.as_deref(),
        tags.next_uid.as_deref(),
        tags.prev_uid.as_deref(),
    );
    let resolver = TagResolver::new(index.clone(), bindings);
    Player::new(index, resolver, host)
}
