use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::ReaderSettings;

use super::reader::{Poll, TagReader};

/// Suppresses repeats of the same UID while a tag lingers on the reader.
#[derive(Debug)]
pub struct Debouncer {
    cooldown: Duration,
    last: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last: None,
        }
    }

    /// Whether `uid` seen at `now` should be forwarded. A UID passes when it
    /// differs from the last forwarded one or the cooldown has elapsed.
    pub fn accept(&mut self, uid: &str, now: Instant) -> bool {
        if let Some((last_uid, at)) = &self.last {
            if last_uid == uid && now.saturating_duration_since(*at) < self.cooldown {
                return false;
            }
        }
        self.last = Some((uid.to_string(), now));
        true
    }
}

/// Poll `reader` on a background thread and hand each debounced UID to
/// `on_tag`.
///
/// The thread ends when the reader closes or `on_tag` returns `false`
/// (typically because the receiving end of a channel hung up).
pub fn spawn_tag_source<R, F>(mut reader: R, settings: &ReaderSettings, mut on_tag: F) -> JoinHandle<()>
where
    R: TagReader + 'static,
    F: FnMut(String) -> bool + Send + 'static,
{
    let poll_interval = Duration::from_millis(settings.poll_interval_ms);
    let mut debouncer = Debouncer::new(Duration::from_millis(settings.cooldown_ms));

    thread::spawn(move || {
        info!("tag source started");
        loop {
            match reader.poll() {
                Ok(Poll::Tag(uid)) => {
                    if !debouncer.accept(&uid, Instant::now()) {
                        debug!(uid = %uid, "tag still within cooldown");
                        continue;
                    }
                    debug!(uid = %uid, "tag detected");
                    if !on_tag(uid) {
                        break;
                    }
                }
                Ok(Poll::Empty) => thread::sleep(poll_interval),
                Ok(Poll::Closed) => {
                    info!("tag reader closed");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "tag reader error");
                    thread::sleep(poll_interval);
                }
            }
        }
        info!("tag source stopped");
    })
}
