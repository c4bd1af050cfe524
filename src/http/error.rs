use std::error::Error as StdError;
use std::fmt;

use reqwest::{Error as ReqwestError, StatusCode};
use url::ParseError as UrlError;

use super::Route;

/// The JSON body of a failed Bot API call.
#[derive(Clone, Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    parameters: Option<ResponseParameters>,
}

/// Extra information the Bot API attaches to some errors.
///
/// [Bot API docs](https://core.telegram.org/bots/api#responseparameters).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this id.
    #[serde(default)]
    pub migrate_to_chat_id: Option<i64>,
    /// The number of seconds left to wait before the request can be repeated.
    #[serde(default)]
    pub retry_after: Option<u64>,
}

#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ErrorResponse {
    pub status_code: StatusCode,
    pub method: &'static str,
    /// The Bot API `error_code`, which mirrors the HTTP status for most errors.
    pub error_code: i64,
    pub description: String,
    pub parameters: Option<ResponseParameters>,
}

impl ErrorResponse {
    /// Builds the error out of a non-successful response body, falling back to the raw body text
    /// when it is not the usual JSON error object.
    pub(crate) fn from_body(route: Route, status_code: StatusCode, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ApiErrorBody>(body).unwrap_or_default();

        ErrorResponse {
            status_code,
            method: route.method(),
            error_code: parsed.error_code.unwrap_or_else(|| i64::from(status_code.as_u16())),
            description: parsed
                .description
                .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned()),
            parameters: parsed.parameters,
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum HttpError {
    /// When a non-successful status code was received for a request.
    UnsuccessfulRequest(ErrorResponse),
    /// When parsing an URL failed due to invalid input.
    Url(UrlError),
    /// Reqwest's Error contain information on why sending a request failed.
    Request(ReqwestError),
}

impl HttpError {
    /// Returns true when the error is caused by an unsuccessful request
    #[must_use]
    pub fn is_unsuccessful_request(&self) -> bool {
        matches!(self, Self::UnsuccessfulRequest(_))
    }

    /// Returns the status code if the error is an unsuccessful request
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::UnsuccessfulRequest(res) => Some(res.status_code),
            _ => None,
        }
    }
}

impl From<ErrorResponse> for HttpError {
    fn from(error: ErrorResponse) -> Self {
        Self::UnsuccessfulRequest(error)
    }
}

impl From<ReqwestError> for HttpError {
    fn from(error: ReqwestError) -> Self {
        // The URL path carries the bot token.
        Self::Request(error.without_url())
    }
}

impl From<UrlError> for HttpError {
    fn from(error: UrlError) -> Self {
        Self::Url(error)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsuccessfulRequest(e) => {
                write!(f, "`{}` failed with {}: {}", e.method, e.error_code, e.description)
            },
            Self::Url(_) => f.write_str("Provided URL is incorrect."),
            Self::Request(_) => f.write_str("Error while sending HTTP request."),
        }
    }
}

impl StdError for HttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Url(inner) => Some(inner),
            Self::Request(inner) => Some(inner),
            Self::UnsuccessfulRequest(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_api_error_bodies_are_parsed() {
        let body = br#"{"ok":false,"error_code":400,"description":"Bad Request: STICKERSET_INVALID"}"#;
        let error = ErrorResponse::from_body(Route::GetStickerSet, StatusCode::BAD_REQUEST, body);

        assert_eq!(error.method, "getStickerSet");
        assert_eq!(error.error_code, 400);
        assert_eq!(error.description, "Bad Request: STICKERSET_INVALID");
        assert!(error.parameters.is_none());
    }

    #[test]
    fn retry_after_is_kept() {
        let body = br#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 5","parameters":{"retry_after":5}}"#;
        let error =
            ErrorResponse::from_body(Route::AddStickerToSet, StatusCode::TOO_MANY_REQUESTS, body);

        assert_eq!(error.parameters.and_then(|p| p.retry_after), Some(5));
    }

    #[test]
    fn non_json_bodies_fall_back_to_text() {
        let error =
            ErrorResponse::from_body(Route::DeleteStickerSet, StatusCode::BAD_GATEWAY, b"Bad Gateway");

        assert_eq!(error.error_code, 502);
        assert_eq!(error.description, "Bad Gateway");
        assert_eq!(
            HttpError::from(error).to_string(),
            "`deleteStickerSet` failed with 502: Bad Gateway"
        );
    }
}
