//! The HTTP module which provides the transport seam of the library, and a default transport
//! performing requests to the Bot API.
//!
//! Every request the [`StickerSetClient`] makes goes through an [`Invoker`], which comes in two
//! shapes:
//!
//! - [`Invoker::invoke`], sending string fields only;
//! - [`Invoker::invoke_with_files`], additionally streaming named files as multipart parts.
//!
//! With the `http` feature enabled, [`Http`] implements both over `reqwest`. Bots that already
//! own a transport (or tests) can implement [`Invoker`] themselves.
//!
//! The transport performs exactly one request per call: no ratelimiting, no retries, no
//! queueing. Those concerns belong to the runtime hosting the bot.
//!
//! [`StickerSetClient`]: crate::client::StickerSetClient

#[cfg(feature = "http")]
mod client;
#[cfg(feature = "http")]
mod error;
#[cfg(feature = "http")]
mod multipart;
mod params;
mod routing;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

#[cfg(feature = "http")]
pub use self::client::*;
#[cfg(feature = "http")]
pub use self::error::*;
#[cfg(feature = "http")]
pub use self::multipart::Multipart;
pub use self::params::{json_text, Params};
pub use self::routing::Route;
use crate::builder::InputFile;
use crate::internal::prelude::*;

/// A named file sent as a part of a multipart request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    /// The part name. Fields refer to it as `attach://<name>`.
    pub name: String,
    pub file: InputFile,
}

impl Attachment {
    pub fn new(name: impl Into<String>, file: InputFile) -> Self {
        Self {
            name: name.into(),
            file,
        }
    }
}

/// Performs Bot API calls on behalf of the [`StickerSetClient`].
///
/// Implementations return the raw body of a successful response, and an error when the network
/// fails or the server answers with a non-successful status. Decoding is left to the caller.
///
/// [`StickerSetClient`]: crate::client::StickerSetClient
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Calls `route` with string fields only.
    async fn invoke(&self, route: Route, params: Params) -> Result<Bytes>;

    /// Calls `route` with string fields, streaming every file in `files` as a part named after
    /// its [`Attachment::name`].
    async fn invoke_with_files(
        &self,
        route: Route,
        files: Vec<Attachment>,
        params: Params,
    ) -> Result<Bytes>;
}

#[async_trait]
impl<T: Invoker + ?Sized> Invoker for Arc<T> {
    async fn invoke(&self, route: Route, params: Params) -> Result<Bytes> {
        (**self).invoke(route, params).await
    }

    async fn invoke_with_files(
        &self,
        route: Route,
        files: Vec<Attachment>,
        params: Params,
    ) -> Result<Bytes> {
        (**self).invoke_with_files(route, files, params).await
    }
}

#[async_trait]
impl<T: Invoker + ?Sized> Invoker for &T {
    async fn invoke(&self, route: Route, params: Params) -> Result<Bytes> {
        (**self).invoke(route, params).await
    }

    async fn invoke_with_files(
        &self,
        route: Route,
        files: Vec<Attachment>,
        params: Params,
    ) -> Result<Bytes> {
        (**self).invoke_with_files(route, files, params).await
    }
}
