//! Mappings of objects sent to and received from the sticker methods of the Bot API.
//!
//! These are plain values owned by the caller: the library never keeps any of them around
//! between requests.

pub mod file;
pub mod id;
pub mod prelude;
pub mod sticker;
