//! tg-stickers is a Rust library for the sticker set methods of the Telegram Bot API.
//!
//! The library covers one slice of the Bot API: creating sticker sets, fetching them, and
//! changing their stickers, titles and thumbnails. Each method of the [`StickerSetClient`] maps to
//! exactly one Bot API call.
//!
//! Requests go through an [`Invoker`], which is the only thing a client holds. The default
//! [`Http`] invoker talks to `api.telegram.org` over `reqwest`; bots that already own a
//! transport can implement [`Invoker`] for it and hand that to the client instead.
//!
//! Ratelimiting, retries, webhooks and long polling are all left to the bot framework hosting
//! the client.
//!
//! # Example
//!
//! ```rust,no_run
//! use tg_stickers::builder::{InputFile, InputSticker};
//! use tg_stickers::model::prelude::*;
//! use tg_stickers::StickerSetClient;
//!
//! # async fn run() -> tg_stickers::Result<()> {
//! let client = StickerSetClient::with_token(&std::env::var("TELEGRAM_TOKEN").unwrap());
//!
//! let set = StickerSet::new(StickerType::Regular, "cats_by_my_bot", "Cats");
//! let cat = InputSticker::new(InputFile::path("./stickers/tabby.webp"), StickerFormat::Static, ["😺"]);
//! client.add_sticker_to_set(UserId(42), &cat, &set).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Installation
//!
//! Add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! tg-stickers = "0.1"
//! ```
//!
//! [`StickerSetClient`]: crate::client::StickerSetClient
//! [`Invoker`]: crate::http::Invoker
//! [`Http`]: crate::http::Http
#![doc(html_root_url = "https://docs.rs/tg-stickers/*")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::doc_markdown,
    clippy::missing_panics_doc,
    clippy::doc_link_with_quotes
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
extern crate serde;

#[macro_use]
mod internal;

pub mod builder;
pub mod client;
pub mod constants;
pub mod http;
pub mod json;
pub mod model;
pub mod prelude;

mod error;
mod secret_string;

pub use crate::client::StickerSetClient;
pub use crate::error::{DecodeError, Error, Result};
pub use crate::secret_string::SecretString;

/// Special module that re-exports most public items from this crate.
///
/// Useful, because you don't have to remember the full paths of tg-stickers items.
pub mod all {
    #[doc(no_inline)]
    pub use crate::builder::*;
    #[doc(no_inline)]
    pub use crate::client::*;
    #[doc(no_inline)]
    pub use crate::constants::*;
    #[doc(no_inline)]
    pub use crate::http::*;
    #[doc(no_inline)]
    pub use crate::{model::prelude::*, *};
}

// Re-exports of crates used internally which are already publically exposed.
pub use async_trait::async_trait;
pub use bytes;
