//! RFID tags: resolving scanned UIDs and polling a reader for them.
//!
//! `resolver` decides what a UID means (a control action or an album).
//! `reader` and `source` turn a physical or emulated reader into a stream of
//! debounced UIDs delivered from a background thread.

mod reader;
mod resolver;
mod source;

pub use reader::*;
pub use resolver::*;
pub use source::*;
