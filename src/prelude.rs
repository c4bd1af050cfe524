//! A set of exports which can be helpful to use.
//!
//! Note that the `StickersError` re-export is equivalent to [`tg_stickers::Error`], although is
//! re-exported as a separate name to remove likely ambiguity with other crate error enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use tg_stickers::prelude::*;
//! ```
//!
//! [`tg_stickers::Error`]: crate::Error

pub use crate::builder::{InputFile, InputSticker};
pub use crate::client::StickerSetClient;
pub use crate::error::Error as StickersError;
#[cfg(feature = "http")]
pub use crate::http::{Http, HttpBuilder, HttpError};
pub use crate::http::{Invoker, Route};
