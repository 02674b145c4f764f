//! HTTP dispatcher for the Glassix REST API.
//!
//! `GlassixClient` owns the transport, the credentials and the token cache.
//! Every resource client funnels through [`GlassixClient::send`], which
//! attaches the bearer token and custom headers, serializes the body,
//! executes the call and decodes the response into the requested shape.
//!
//! # Response shapes
//!
//! The expected response is selected by a type implementing
//! [`FromResponse`]:
//!
//! - [`NoContent`]: any successful response, body ignored
//! - [`RawText`]: `text/html` bodies as-is, otherwise a JSON string
//! - [`RawBytes`]: `application/pdf` bodies as-is, otherwise a base64 JSON string
//! - [`Json<T>`]: JSON deserialized into `T`, field names matched
//!   case-insensitively
//!
//! # Security
//!
//! The API secret and bearer tokens are never logged. Error messages built
//! from response bodies are sanitized before they are returned.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::TokenCache;
use crate::config::Credentials;
use crate::decode;
use crate::error::{GlassixError, Result};
use crate::models::{TokenRequest, TokenResponse};

/// Decodes a successful response body into a typed value.
pub trait FromResponse: Sized {
    /// Builds the value from the response media type and raw body.
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::Serialization` or `GlassixError::Decode` if
    /// the body does not have the expected shape.
    fn from_response(content_type: Option<&str>, body: &[u8]) -> Result<Self>;
}

/// Marker for endpoints whose response body is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoContent;

impl FromResponse for NoContent {
    fn from_response(_content_type: Option<&str>, _body: &[u8]) -> Result<Self> {
        Ok(NoContent)
    }
}

/// Response body returned verbatim when the server sends HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText(pub String);

impl FromResponse for RawText {
    fn from_response(content_type: Option<&str>, body: &[u8]) -> Result<Self> {
        if is_media_type(content_type, "text/html") {
            return Ok(RawText(String::from_utf8_lossy(body).into_owned()));
        }
        let text: String = serde_json::from_slice(body)?;
        Ok(RawText(text))
    }
}

/// Response body returned verbatim when the server sends a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBytes(pub Vec<u8>);

impl FromResponse for RawBytes {
    fn from_response(content_type: Option<&str>, body: &[u8]) -> Result<Self> {
        if is_media_type(content_type, "application/pdf") {
            return Ok(RawBytes(body.to_vec()));
        }
        // Byte arrays otherwise travel as base64 JSON strings.
        let encoded: String = serde_json::from_slice(body)?;
        base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map(RawBytes)
            .map_err(|e| GlassixError::Decode(format!("invalid base64 payload: {}", e)))
    }
}

/// JSON response deserialized into `T`. Struct field names are matched
/// without regard to case.
#[derive(Debug, Clone, PartialEq)]
pub struct Json<T>(pub T);

impl<T: DeserializeOwned> FromResponse for Json<T> {
    fn from_response(_content_type: Option<&str>, body: &[u8]) -> Result<Self> {
        Ok(Json(decode::from_slice(body)?))
    }
}

/// Compares the essence of a `Content-Type` value, ignoring parameters.
fn is_media_type(content_type: Option<&str>, expected: &str) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(expected))
}

/// Client for the Glassix API.
///
/// Cloning is cheap: clones share the connection pool, the credentials and
/// the token cache.
///
/// # Example
///
/// ```ignore
/// let credentials = Credentials::from_env()?;
/// let client = GlassixClient::new(credentials)?;
///
/// let ticket = client.tickets().get(1234).await?;
/// ```
#[derive(Clone)]
pub struct GlassixClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Validated credentials.
    /// SECURITY: the API secret inside must never be logged.
    credentials: Arc<Credentials>,

    /// Base URL, e.g. `https://acme.glassix.com/api/v1.2`.
    base_url: Arc<str>,

    /// Extra headers sent with every request.
    headers: HeaderMap,

    /// Bearer tokens per credential identity.
    tokens: Arc<TokenCache>,
}

impl GlassixClient {
    /// Creates a client for the given credentials.
    ///
    /// The transport uses the credential timeout and sends
    /// `Accept: application/json` by default.
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(Duration::from_secs(credentials.timeout_secs()))
            .default_headers(default_headers)
            .build()
            .map_err(GlassixError::HttpClient)?;

        let base_url: Arc<str> = Arc::from(credentials.base_url());

        Ok(Self {
            http,
            credentials: Arc::new(credentials),
            base_url,
            headers: HeaderMap::new(),
            tokens: Arc::new(TokenCache::new()),
        })
    }

    /// Adds headers sent with every request.
    ///
    /// Entries with an empty name or value are skipped; entries that are not
    /// valid HTTP header names or values are skipped with a warning.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in headers {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key.is_empty() || value.is_empty() {
                continue;
            }
            let name = match HeaderName::from_bytes(key.as_bytes()) {
                Ok(name) => name,
                Err(_) => {
                    tracing::warn!(header = %key, "Skipping invalid custom header name");
                    continue;
                }
            };
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    self.headers.insert(name, value);
                }
                Err(_) => {
                    tracing::warn!(header = %key, "Skipping custom header with invalid value");
                }
            }
        }
        self
    }

    /// Uses a shared token cache instead of the client's own.
    pub fn with_token_cache(mut self, tokens: Arc<TokenCache>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Overrides the API base URL (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = Arc::from(base_url.as_ref().trim_end_matches('/'));
        self
    }

    /// Credentials this client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Obtains a bearer token now, fetching one if none is cached.
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::Authentication` if no token could be obtained.
    pub async fn authenticate(&self) -> Result<()> {
        self.access_token().await.map(|_| ())
    }

    /// Returns a valid bearer token from the cache or the token endpoint.
    async fn access_token(&self) -> Result<String> {
        let key = self.credentials.token_key();
        self.tokens.get_token(&key, || self.fetch_token()).await
    }

    /// Calls `POST /token/get`.
    async fn fetch_token(&self) -> Result<TokenResponse> {
        let body = serde_json::to_value(TokenRequest {
            api_key: self.credentials.api_key().to_string(),
            api_secret: self.credentials.api_secret(),
            user_name: self.credentials.user_name(),
        })?;
        let (content_type, bytes) = self
            .execute(Method::POST, "/token/get", Some(body), None)
            .await?;
        let Json(response) = Json::<TokenResponse>::from_response(content_type.as_deref(), &bytes)?;
        Ok(response)
    }

    /// Executes one API call and decodes the response as `R`.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Path below the base URL (e.g. `/tickets/get/1`), or an absolute URL
    /// * `body` - Optional JSON body
    /// * `requires_auth` - Whether to attach a bearer token
    ///
    /// # Errors
    ///
    /// - `Authentication` if a token was required and could not be obtained
    /// - `Transport` / `Timeout` on network failure
    /// - `Api` on a non-success status
    /// - `Serialization` / `Decode` if the body does not match `R`
    pub async fn send<R: FromResponse>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        requires_auth: bool,
    ) -> Result<R> {
        let token = if requires_auth {
            Some(self.access_token().await?)
        } else {
            None
        };

        let (content_type, bytes) = self.execute(method, path, body, token.as_deref()).await?;
        R::from_response(content_type.as_deref(), &bytes)
    }

    /// Makes an authenticated GET request.
    pub async fn get<R: FromResponse>(&self, path: &str) -> Result<R> {
        self.send(Method::GET, path, None, true).await
    }

    /// Makes an authenticated POST request.
    pub async fn post<R: FromResponse>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R> {
        self.send(Method::POST, path, body, true).await
    }

    /// Makes an authenticated PUT request.
    pub async fn put<R: FromResponse>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R> {
        self.send(Method::PUT, path, body, true).await
    }

    /// Makes an authenticated DELETE request.
    pub async fn delete<R: FromResponse>(&self, path: &str) -> Result<R> {
        self.send(Method::DELETE, path, None, true).await
    }

    /// Sends the request and returns the content type and raw body of a
    /// successful response.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<(Option<String>, Vec<u8>)> {
        let url = self.url(path);

        tracing::debug!(
            method = %method,
            path = %path,
            authenticated = bearer.is_some(),
            "Making Glassix API request"
        );

        let mut req = self
            .http
            .request(method.clone(), &url)
            .headers(self.headers.clone());

        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| self.transport_error(e, &method, path))?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e, &method, path))?;

        tracing::trace!(status = %status, len = bytes.len(), "Glassix API response");

        Ok((content_type, bytes.to_vec()))
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    fn transport_error(&self, error: reqwest::Error, method: &Method, path: &str) -> GlassixError {
        if error.is_timeout() {
            return GlassixError::timeout(
                Duration::from_secs(self.credentials.timeout_secs()),
                format!("{} {}", method, path),
            );
        }
        GlassixError::Transport(error.without_url())
    }

    /// Converts a non-success response into `GlassixError::Api`.
    ///
    /// The message is the response body, or the reason phrase when the body
    /// is empty.
    async fn handle_http_error(&self, status: StatusCode, response: reqwest::Response) -> GlassixError {
        let body = response.text().await.unwrap_or_default();
        let body = GlassixError::sanitize_message(&body, self.credentials.api_secret());

        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        } else {
            body
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(status = %status, "Glassix API rejected credentials");
        } else {
            tracing::debug!(status = %status, "Glassix API returned an error status");
        }

        GlassixError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl std::fmt::Debug for GlassixClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlassixClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Environment;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio_test::assert_ok;
    use uuid::Uuid;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) const TOKEN: &str = "tok-123";
    pub(crate) const SECRET: &str = "s3cr3t-value";

    pub(crate) fn credentials() -> Credentials {
        Credentials::new(
            "acme",
            "bot@acme.com",
            Uuid::parse_str("6f1c1a5e-8c1b-4f4e-9a57-3f1d2e4b5c6d").unwrap(),
            SECRET,
            5,
            Environment::Production,
        )
        .unwrap()
    }

    /// Starts a mock server that answers the token endpoint.
    pub(crate) async fn server_with_token() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": TOKEN,
                "token_type": "bearer",
                "expires_in": 10800
            })))
            .mount(&server)
            .await;
        server
    }

    pub(crate) fn client_for(server: &MockServer) -> GlassixClient {
        GlassixClient::new(credentials())
            .unwrap()
            .with_base_url(server.uri())
    }

    #[test]
    fn test_default_base_url_from_credentials() {
        let client = GlassixClient::new(credentials()).unwrap();
        assert_eq!(client.base_url(), "https://acme.glassix.com/api/v1.2");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = GlassixClient::new(credentials())
            .unwrap()
            .with_base_url("http://localhost:8080/");
        assert_eq!(client.url("/tickets/get/1"), "http://localhost:8080/tickets/get/1");
        assert_eq!(client.url("https://other.example/x"), "https://other.example/x");
    }

    #[test]
    fn test_with_headers_skips_empty_and_invalid() {
        let client = GlassixClient::new(credentials()).unwrap().with_headers([
            ("X-Tenant", "blue"),
            ("", "ignored"),
            ("X-Empty", ""),
            ("bad header", "x"),
            ("X-Bad-Value", "line\nbreak"),
        ]);
        assert_eq!(client.headers.len(), 1);
        assert_eq!(client.headers.get("x-tenant").unwrap(), "blue");
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = GlassixClient::new(credentials()).unwrap();
        assert!(!format!("{:?}", client).contains(SECRET));
    }

    #[test]
    fn test_media_type_matching() {
        assert!(is_media_type(Some("text/html; charset=utf-8"), "text/html"));
        assert!(is_media_type(Some("Application/PDF"), "application/pdf"));
        assert!(!is_media_type(Some("application/json"), "text/html"));
        assert!(!is_media_type(None, "text/html"));
    }

    #[test]
    fn test_raw_bytes_falls_back_to_base64_json() {
        let RawBytes(bytes) =
            RawBytes::from_response(Some("application/json"), br#""JVBERg==""#).unwrap();
        assert_eq!(bytes, b"%PDF".to_vec());

        let err = RawBytes::from_response(Some("application/json"), br#""***""#).unwrap_err();
        assert!(matches!(err, GlassixError::Decode(_)));
    }

    #[test]
    fn test_raw_text_falls_back_to_json_string() {
        let RawText(text) =
            RawText::from_response(Some("application/json"), br#""<p>hi</p>""#).unwrap();
        assert_eq!(text, "<p>hi</p>");
    }

    #[test]
    fn test_json_matches_fields_case_insensitively() {
        let Json(ticket) = Json::<crate::models::Ticket>::from_response(
            Some("application/json"),
            br#"{"Id": 1234, "State": "Open", "Field1": "Printer"}"#,
        )
        .unwrap();
        assert_eq!(ticket.id, Some(1234));
        assert_eq!(ticket.state, Some(crate::models::TicketState::Open));
        assert_eq!(ticket.field1.as_deref(), Some("Printer"));
    }

    #[tokio::test]
    async fn test_no_content_accepts_any_success_body() {
        let server = server_with_token().await;
        Mock::given(method("PUT"))
            .and(path("/tickets/assignavailableuser/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/tickets/assignavailableuser/2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("whatever {"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let first = client.put::<NoContent>("/tickets/assignavailableuser/1", None).await;
        let second = client.put::<NoContent>("/tickets/assignavailableuser/2", None).await;
        assert_eq!(assert_ok!(first), NoContent);
        assert_eq!(assert_ok!(second), NoContent);
    }

    #[tokio::test]
    async fn test_not_found_carries_body_and_status() {
        let server = server_with_token().await;
        Mock::given(method("GET"))
            .and(path("/tickets/get/404"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get::<Json<serde_json::Value>>("/tickets/get/404")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not found");
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_reason_phrase() {
        let server = server_with_token().await;
        Mock::given(method("GET"))
            .and(path("/users/allusers"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get::<NoContent>("/users/allusers")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Service Unavailable");
        assert_eq!(err.status_code(), Some(503));
    }

    #[tokio::test]
    async fn test_error_body_is_sanitized() {
        let server = server_with_token().await;
        Mock::given(method("GET"))
            .and(path("/echo"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(format!("bad secret {}", SECRET)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).get::<NoContent>("/echo").await.unwrap_err();
        assert!(!err.to_string().contains(SECRET));
        assert!(err.to_string().contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_pdf_bytes_are_returned_unparsed() {
        let server = server_with_token().await;
        let pdf = b"%PDF-1.7\n\x00\x01binary".to_vec();
        Mock::given(method("POST"))
            .and(path("/tickets/pdf/7"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(pdf.clone(), "application/pdf"))
            .mount(&server)
            .await;

        let RawBytes(bytes) = client_for(&server)
            .post::<RawBytes>("/tickets/pdf/7", Some(json!({})))
            .await
            .unwrap();
        assert_eq!(&bytes[..4], b"%PDF");
        assert_eq!(bytes, pdf);
    }

    #[tokio::test]
    async fn test_html_is_returned_unparsed() {
        let server = server_with_token().await;
        Mock::given(method("POST"))
            .and(path("/tickets/html/7"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>hi</html>", "text/html"))
            .mount(&server)
            .await;

        let RawText(html) = client_for(&server)
            .post::<RawText>("/tickets/html/7", None)
            .await
            .unwrap();
        assert_eq!(html, "<html>hi</html>");
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_serialization_error() {
        let server = server_with_token().await;
        Mock::given(method("GET"))
            .and(path("/tickets/get/1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get::<Json<crate::models::Ticket>>("/tickets/get/1")
            .await
            .unwrap_err();
        assert!(matches!(err, GlassixError::Serialization(_)));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_token_and_custom_headers_are_attached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token/get"))
            .and(body_json(json!({
                "apiKey": "6f1c1a5e-8c1b-4f4e-9a57-3f1d2e4b5c6d",
                "apiSecret": SECRET,
                "userName": "bot@acme.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": TOKEN,
                "token_type": "bearer",
                "expires_in": 10800
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/cannedreplies/getall"))
            .and(header("authorization", "Bearer tok-123"))
            .and(header("x-request-source", "tests"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server).with_headers([("X-Request-Source", "tests")]);
        for _ in 0..2 {
            let Json(replies) = client
                .get::<Json<Vec<serde_json::Value>>>("/cannedreplies/getall")
                .await
                .unwrap();
            assert!(replies.is_empty());
        }
    }

    #[tokio::test]
    async fn test_token_failure_prevents_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token/get"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/allusers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get::<NoContent>("/users/allusers")
            .await
            .unwrap_err();
        assert!(matches!(err, GlassixError::Authentication(ref m) if m.contains("invalid api key")));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_empty_token_is_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "",
                "expires_in": 10800
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).authenticate().await.unwrap_err();
        assert!(matches!(err, GlassixError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_unauthenticated_request_skips_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token/get"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tenants/isonline"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
            .mount(&server)
            .await;

        let Json(online) = client_for(&server)
            .send::<Json<bool>>(Method::GET, "/tenants/isonline", None, false)
            .await
            .unwrap();
        assert!(online);
    }

    #[tokio::test]
    async fn test_shared_token_cache_across_clients() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": TOKEN,
                "expires_in": 10800
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cache = Arc::new(TokenCache::new());
        let a = client_for(&server).with_token_cache(cache.clone());
        let b = client_for(&server).with_token_cache(cache);
        assert_ok!(a.authenticate().await);
        assert_ok!(b.authenticate().await);
    }

    #[tokio::test]
    async fn test_timeout_is_reported_without_status() {
        let server = server_with_token().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        let creds = Credentials::new(
            "acme",
            "bot@acme.com",
            Uuid::parse_str("6f1c1a5e-8c1b-4f4e-9a57-3f1d2e4b5c6d").unwrap(),
            SECRET,
            1,
            Environment::Production,
        )
        .unwrap();
        let client = GlassixClient::new(creds).unwrap().with_base_url(server.uri());
        let err = client.get::<NoContent>("/slow").await.unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let client = GlassixClient::new(credentials())
            .unwrap()
            .with_base_url("http://127.0.0.1:1");
        let err = client
            .send::<NoContent>(Method::GET, "/tenants/isonline", None, false)
            .await
            .unwrap_err();
        assert!(matches!(err, GlassixError::Transport(_)));
        assert_eq!(err.status_code(), None);
    }
}
