//! A set of constants used by the library.

/// The base URI for the Bot API.
pub const API_BASE: &str = "https://api.telegram.org";

/// The `User-Agent` sent along with every request.
pub const USER_AGENT: &str =
    concat!("tg-stickers (https://crates.io/crates/tg-stickers, ", env!("CARGO_PKG_VERSION"), ")");

/// The scheme prefix that makes a field refer to a multipart part of the same request.
pub const ATTACH_PREFIX: &str = "attach://";
