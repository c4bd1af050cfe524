use std::borrow::Cow;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::{Client, RequestBuilder as ReqwestRequestBuilder, Url};
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;
use tracing::{debug, trace, warn};

use super::multipart::Multipart;
use super::{Attachment, ErrorResponse, HttpError, Invoker, Params, Route};
use crate::constants;
use crate::internal::prelude::*;

/// A builder for the underlying [`Http`] client that performs requests to the Bot API.
///
/// ```rust
/// # use tg_stickers::http::HttpBuilder;
/// # fn run() {
/// let http = HttpBuilder::new("123456:ABC-DEF").base_url("http://localhost:8081").build();
/// # }
/// ```
#[must_use]
pub struct HttpBuilder {
    client: Option<Client>,
    token: SecretString,
    base_url: Cow<'static, str>,
}

impl HttpBuilder {
    /// Construct a new builder to call methods on the Bot API with a token.
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            client: None,
            token: SecretString::from(token.as_ref().trim()),
            base_url: Cow::Borrowed(constants::API_BASE),
        }
    }

    /// Sets the token for the bot, replacing the one given to [`Self::new`]. Surrounding
    /// whitespace is trimmed.
    pub fn token(mut self, token: impl AsRef<str>) -> Self {
        self.token = SecretString::from(token.as_ref().trim());
        self
    }

    /// Sets the [`reqwest::Client`]. If one isn't provided, a default one will be used.
    ///
    /// Timeouts, proxies and connection pooling are all configured on the client.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the base URL requests are sent to, such as a self-hosted Bot API server.
    ///
    /// Defaults to [`constants::API_BASE`].
    pub fn base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use the given configuration to build the `Http` client.
    #[must_use]
    pub fn build(self) -> Http {
        Http {
            client: self.client.unwrap_or_default(),
            token: self.token,
            base_url: self.base_url,
        }
    }
}

/// **Note**: For all member functions that return a [`Result`], the Error kind will be either
/// [`Error::Http`], [`Error::Io`] or [`Error::Json`].
///
/// [`Error::Http`]: crate::error::Error::Http
/// [`Error::Io`]: crate::error::Error::Io
/// [`Error::Json`]: crate::error::Error::Json
#[derive(Clone, Debug)]
pub struct Http {
    pub(crate) client: Client,
    token: SecretString,
    base_url: Cow<'static, str>,
}

impl Http {
    #[must_use]
    pub fn new(token: &str) -> Self {
        HttpBuilder::new(token).build()
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The full URL of a route, including the bot token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Url`] if the configured base URL is not a valid URL.
    pub fn url(&self, route: Route) -> Result<Url> {
        let url = api!(self.base_url, self.token.expose_secret(), route.method());
        Url::parse(&url).map_err(|e| Error::Http(HttpError::Url(e)))
    }

    fn request(&self, route: Route) -> Result<ReqwestRequestBuilder> {
        Ok(self
            .client
            .post(self.url(route)?)
            .header(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT)))
    }

    /// Sends a request and returns the body of a successful response.
    ///
    /// Responses with a non-successful status are turned into
    /// [`HttpError::UnsuccessfulRequest`].
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, builder)))]
    async fn fire(&self, route: Route, builder: ReqwestRequestBuilder) -> Result<Bytes> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            trace!("{route} answered {status} with {} bytes", body.len());
            Ok(body)
        } else {
            let error = ErrorResponse::from_body(route, status, &body);
            warn!("{route} was refused with {}: {}", error.error_code, error.description);
            Err(Error::Http(HttpError::UnsuccessfulRequest(error)))
        }
    }
}

#[async_trait]
impl Invoker for Http {
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, params)))]
    async fn invoke(&self, route: Route, params: Params) -> Result<Bytes> {
        debug!("calling {route} with {} field(s)", params.len());

        let builder = self.request(route)?.form(&params);
        self.fire(route, builder).await
    }

    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, files, params)))]
    async fn invoke_with_files(
        &self,
        route: Route,
        files: Vec<Attachment>,
        params: Params,
    ) -> Result<Bytes> {
        debug!("calling {route} with {} field(s) and {} file(s)", params.len(), files.len());

        let form = Multipart {
            files,
            fields: params,
        }
        .build_form()
        .await?;

        let builder = self.request(route)?.multipart(form);
        self.fire(route, builder).await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;
    use crate::builder::InputFile;

    /// Whether `request` holds a whole HTTP request, going by its framing headers.
    fn is_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        });

        match length {
            Some(length) => body.len() >= length,
            None => body.ends_with("0\r\n\r\n"),
        }
    }

    /// Answers a single request on a local port, handing back the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];
            while !is_complete(&request) {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, server)
    }

    fn local_http(token: &str, base_url: impl Into<Cow<'static, str>>) -> Http {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpBuilder::new(token).client(client).base_url(base_url).build()
    }

    #[tokio::test]
    async fn multipart_requests_carry_files_and_fields() {
        let (base_url, server) = serve_once("200 OK", r#"{"ok":true,"result":true}"#).await;
        let http = local_http("42:xyz", base_url);

        let mut params = Params::new();
        params.insert("user_id", "42");
        params.insert("name", "cats_by_bot");
        let files = vec![
            Attachment::new("sticker0", InputFile::bytes(b"RIFF".to_vec(), "a.webp")),
            Attachment::new("thumbnail", InputFile::remote("AgAC")),
        ];

        let body = http.invoke_with_files(Route::AddStickerToSet, files, params).await.unwrap();
        assert_eq!(&body[..], br#"{"ok":true,"result":true}"#);

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("post /bot42:xyz/addstickertoset "), "{request}");
        assert!(request.contains("content-type: multipart/form-data; boundary="));
        assert!(request.contains(
            "name=\"sticker0\"; filename=\"a.webp\"\r\ncontent-type: image/webp\r\n\r\nriff\r\n"
        ));
        assert!(request.contains("name=\"thumbnail\"\r\n\r\nagac\r\n"));
        assert!(request.contains("name=\"user_id\"\r\n\r\n42\r\n"));
        assert!(request.contains("name=\"name\"\r\n\r\ncats_by_bot\r\n"));
    }

    #[tokio::test]
    async fn refused_requests_carry_the_error_code() {
        let (base_url, server) = serve_once(
            "400 Bad Request",
            r#"{"ok":false,"error_code":400,"description":"Bad Request: STICKERSET_INVALID"}"#,
        )
        .await;
        let http = local_http("42:xyz", base_url);

        let mut params = Params::new();
        params.insert("name", "nonexistent");
        let err = http.invoke(Route::GetStickerSet, params).await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.error_code(), Some(400));
        assert!(err.to_string().contains("STICKERSET_INVALID"));
        assert!(server.await.unwrap().ends_with("\r\n\r\nname=nonexistent"));
    }

    #[tokio::test]
    async fn transport_errors_hide_the_token() {
        let http = local_http("123456:SECRETTOKEN", "http://127.0.0.1:1");

        let err = http.invoke(Route::GetStickerSet, Params::new()).await.unwrap_err();

        assert!(matches!(err, Error::Http(HttpError::Request(_))));
        assert!(!format!("{err:?}").contains("SECRETTOKEN"));
        assert!(!err.to_string().contains("SECRETTOKEN"));
    }

    #[test]
    fn url_contains_token_and_method() {
        let http = Http::new("123456:ABC-DEF");

        assert_eq!(
            http.url(Route::GetStickerSet).unwrap().as_str(),
            "https://api.telegram.org/bot123456:ABC-DEF/getStickerSet"
        );
    }

    #[test]
    fn custom_base_url_is_used() {
        let http = HttpBuilder::new(" 42:xyz \n").base_url("http://localhost:8081/").build();

        assert_eq!(http.base_url(), "http://localhost:8081/");
        assert_eq!(
            http.url(Route::CreateNewStickerSet).unwrap().as_str(),
            "http://localhost:8081/bot42:xyz/createNewStickerSet"
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let http = HttpBuilder::new("42:xyz").base_url("not a url").build();

        assert!(matches!(http.url(Route::DeleteStickerSet), Err(Error::Http(HttpError::Url(_)))));
    }

    #[test]
    fn token_is_not_in_debug_output() {
        let http = Http::new("123456:ABC-DEF");

        assert!(!format!("{http:?}").contains("ABC-DEF"));
    }
}
