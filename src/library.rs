//! Music library: an immutable snapshot of album folders and their tracks.
//!
//! Each direct sub-directory of the music directory is an album. Files with a
//! recognised audio extension inside it are its tracks, sorted by file name so
//! that track-number prefixes give the expected order. A folder name that
//! starts with a hex token followed by a space (`"9355A72BB5 ACDC"`) binds the
//! album to that RFID tag UID.

mod index;
mod model;
mod scan;

pub use index::*;
pub use model::*;
pub use scan::DEFAULT_EXTENSIONS;
