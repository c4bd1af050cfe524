use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;

use serde_json::Error as JsonError;

#[cfg(feature = "http")]
use crate::http::HttpError;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one type, rather than the
/// usual 2 (`Result<T, Error>`). This is because all functions that return a result return
/// tg-stickers' [`Error`], so this is implied, and a "simpler" result is used.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A common error enum returned by most of the library's functionality within a custom
/// [`Result`].
///
/// Failures fall into two kinds. Transport errors ([`Error::Http`], [`Error::Io`] and
/// [`Error::Transport`]) mean the request never produced a usable response body. A
/// [`Error::Decode`] means the transport succeeded but the body did not have the expected shape.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An error while decoding a response body.
    Decode(DecodeError),
    /// An error from the `std::io` module, raised while reading a local file for upload.
    Io(IoError),
    /// An error from the `serde_json` crate, raised while encoding an outbound parameter.
    Json(JsonError),
    /// An error from the `http` module.
    #[cfg(feature = "http")]
    Http(HttpError),
    /// A transport failure reported by a custom [`Invoker`].
    ///
    /// [`Invoker`]: crate::http::Invoker
    Transport(Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Returns `true` if the request failed before a response body could be decoded.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            Self::Http(_) => true,
            Self::Io(_) | Self::Transport(_) => true,
            Self::Decode(_) | Self::Json(_) => false,
        }
    }

    /// Returns `true` if the transport succeeded but the response body was malformed.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns the Bot API `error_code` if the server rejected the request.
    #[cfg(feature = "http")]
    #[must_use]
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Self::Http(HttpError::UnsuccessfulRequest(response)) => Some(response.error_code),
            _ => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Error {
        Error::Decode(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Error {
        Error::Io(e)
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Error {
        Error::Json(e)
    }
}

#[cfg(feature = "http")]
impl From<HttpError> for Error {
    fn from(e: HttpError) -> Error {
        Error::Http(e)
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(HttpError::from(e))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(inner) => fmt::Display::fmt(inner, f),
            Self::Io(inner) => fmt::Display::fmt(inner, f),
            Self::Json(inner) => fmt::Display::fmt(inner, f),
            #[cfg(feature = "http")]
            Self::Http(inner) => fmt::Display::fmt(inner, f),
            Self::Transport(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Decode(inner) => Some(inner),
            Self::Io(inner) => Some(inner),
            Self::Json(inner) => Some(inner),
            #[cfg(feature = "http")]
            Self::Http(inner) => Some(inner),
            Self::Transport(inner) => Some(&**inner),
        }
    }
}

/// The transport returned a body, but it could not be decoded into the expected type.
#[derive(Debug)]
pub struct DecodeError {
    /// The Bot API method whose response was being decoded.
    pub method: &'static str,
    /// The underlying `serde_json` failure.
    pub source: JsonError,
}

impl DecodeError {
    pub(crate) fn new(method: &'static str, source: JsonError) -> Self {
        Self {
            method,
            source,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed `{}` response: {}", self.method, self.source)
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}
