//! Swap REST API client implementation.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Method;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::auth::{AUTH_TOKEN_HEADER, AuthToken, TokenStore};
use crate::error::SwapError;
use crate::swap::config::SwapClientConfig;
use crate::swap::endpoints::{self, DEFAULT_TIMEOUT, SWAP_BASE_URL};
use crate::swap::traits::SwapApi;
use crate::swap::types::*;

/// The swap REST API client.
///
/// Owns one configured HTTP client and the current auth token. Every request
/// gets the token attached (when set), and every failure comes back as a
/// [`SwapError`].
///
/// The client is not `Clone`: the token belongs to one instance. Share it
/// behind an `Arc` to issue calls from several tasks.
///
/// # Example
///
/// ```rust,no_run
/// use zos_swap_client::swap::SwapClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SwapClient::new()?;
///
///     let currencies = client.get_currencies().await?;
///     for currency in &currencies {
///         println!("{} ({}) on {}", currency.symbol, currency.name, currency.network);
///     }
///
///     Ok(())
/// }
/// ```
///
/// For user-scoped endpoints, set a token first:
///
/// ```rust,no_run
/// use zos_swap_client::swap::SwapClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SwapClient::builder()
///         .base_url("https://zos.computer/")
///         .auth_token("my-jwt")
///         .build()?;
///
///     let history = client.get_swap_history().await?;
///     println!("{} swaps", history.len());
///
///     Ok(())
/// }
/// ```
pub struct SwapClient {
    http_client: ClientWithMiddleware,
    base_url: Url,
    timeout: Duration,
    token: TokenStore,
}

impl SwapClient {
    /// Create a new client with default settings.
    pub fn new() -> Result<Self, SwapError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> SwapClientBuilder {
        SwapClientBuilder::new()
    }

    /// Create a client from plain-data configuration.
    ///
    /// Fails if the base URL or a configured header is invalid.
    pub fn from_config(config: SwapClientConfig) -> Result<Self, SwapError> {
        let mut builder = Self::builder().headers(config.header_map()?);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(base_url) = config.base_url {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// The configured per-request deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // Auth token.

    /// Replace the current auth token.
    ///
    /// The token is not validated. Requests already in flight keep the token
    /// they were sent with.
    pub fn set_auth_token(&self, token: impl Into<AuthToken>) {
        self.token.set(token.into());
    }

    /// Remove the current auth token.
    pub fn clear_auth_token(&self) {
        self.token.clear();
    }

    /// Get the current auth token, if one is set.
    pub fn auth_token(&self) -> Option<String> {
        self.token.get().map(|t| t.expose_secret().to_string())
    }

    // Request execution.

    /// Resolve an endpoint path (plus an optional id segment) against the base URL.
    fn endpoint_url(&self, path: &str, segment: Option<&str>) -> Result<Url, SwapError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                SwapError::request(format!("base URL cannot hold a path: {}", self.base_url))
            })?;
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// Attach the current token, if any, to an outgoing request.
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, SwapError> {
        match self.token.get() {
            Some(token) => {
                let mut value = HeaderValue::from_str(token.expose_secret())
                    .map_err(|e| SwapError::request(format!("invalid auth token: {e}")))?;
                value.set_sensitive(true);
                Ok(request.header(AUTH_TOKEN_HEADER, value))
            }
            None => Ok(request),
        }
    }

    /// Send a request and decode its response.
    async fn execute<T>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<T, SwapError>
    where
        T: DeserializeOwned,
    {
        let path = url.path().to_string();
        let result = self.dispatch(method.clone(), url, body).await;
        if let Err(err) = &result {
            warn!(%method, %path, code = ?err.code(), "swap API request failed: {err}");
        }
        result
    }

    async fn dispatch<T>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<T, SwapError>
    where
        T: DeserializeOwned,
    {
        debug!(
            %method,
            path = url.path(),
            authenticated = self.token.is_set(),
            "dispatching swap API request"
        );

        let mut request = self.authorize(self.http_client.request(method, url))?;
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Normalize a response: 2xx bodies decode into `T`, anything else becomes
    /// [`SwapError::Api`].
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, SwapError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;
        trace!(status = status.as_u16(), bytes = body.len(), "swap API response");

        if !status.is_success() {
            return Err(SwapError::from_response(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| SwapError::request(format!("failed to decode response body: {e}")))
    }

    /// GET without parameters.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, SwapError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path, None)?;
        self.execute(Method::GET, url, None).await
    }

    /// GET with the id appended as a path segment.
    pub(crate) async fn get_by_id<T>(&self, path: &str, id: &str) -> Result<T, SwapError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path, Some(id))?;
        self.execute(Method::GET, url, None).await
    }

    /// GET with query parameters.
    pub(crate) async fn get_with_params<T, Q>(&self, path: &str, params: &Q) -> Result<T, SwapError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut url = self.endpoint_url(path, None)?;
        let query_string = serde_urlencoded::to_string(params)?;
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }
        self.execute(Method::GET, url, None).await
    }

    /// POST with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, SwapError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path, None)?;
        let body = serde_json::to_vec(body)?;
        self.execute(Method::POST, url, Some(body)).await
    }

    // Endpoints.

    /// Get all supported currencies.
    pub async fn get_currencies(&self) -> Result<Vec<Currency>, SwapError> {
        self.get(endpoints::CURRENCIES).await
    }

    /// Get a quote for swapping `amount` of `from_currency` into `to_currency`.
    ///
    /// The amount is not checked locally; the backend decides what it accepts.
    pub async fn get_exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        amount: Decimal,
    ) -> Result<ExchangeEstimate, SwapError> {
        let request = ExchangeRateRequest::new(from_currency, to_currency, amount);
        self.post(endpoints::ESTIMATE, &request).await
    }

    /// Get the allowed amount range for a currency pair.
    pub async fn get_exchange_range(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ExchangeRange, SwapError> {
        let params = ExchangeRangeQuery {
            from_currency,
            to_currency,
        };
        self.get_with_params(endpoints::RANGE, &params).await
    }

    /// Create a swap. The request is sent as-is.
    pub async fn create_exchange(
        &self,
        request: &CreateExchangeRequest,
    ) -> Result<CreateExchangeResponse, SwapError> {
        self.post(endpoints::CREATE, request).await
    }

    /// Get the current status of a swap.
    pub async fn get_exchange_status(&self, swap_id: &str) -> Result<SwapStatusResponse, SwapError> {
        self.get_by_id(endpoints::STATUS, swap_id).await
    }

    /// Get all swaps of the user identified by the auth token.
    pub async fn get_swap_history(&self) -> Result<Vec<Swap>, SwapError> {
        self.get(endpoints::HISTORY).await
    }

    /// Get a single swap.
    pub async fn get_swap_details(&self, swap_id: &str) -> Result<Swap, SwapError> {
        self.get_by_id(endpoints::DETAILS, swap_id).await
    }
}

impl std::fmt::Debug for SwapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("has_token", &self.token.is_set())
            .finish()
    }
}

/// Builder for [`SwapClient`].
pub struct SwapClientBuilder {
    base_url: String,
    timeout: Duration,
    headers: HeaderMap,
    user_agent: Option<String>,
    auth_token: Option<AuthToken>,
}

impl SwapClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: SWAP_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: HeaderMap::new(),
            user_agent: None,
            auth_token: None,
        }
    }

    /// Set the base URL (origin plus optional path prefix).
    ///
    /// A base URL carrying a query string or fragment is rejected by [`build`](Self::build).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header sent with every request.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add several default headers.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Start with an auth token already set.
    pub fn auth_token(mut self, token: impl Into<AuthToken>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Build the client.
    ///
    /// Fails with [`SwapError::Request`] if the base URL or user agent is
    /// invalid, or if the HTTP client cannot be configured.
    pub fn build(self) -> Result<SwapClient, SwapError> {
        let base_url = parse_base_url(&self.base_url)?;

        // Caller headers first; the fixed content type goes in last so it wins.
        let mut headers = self.headers;
        if let Some(user_agent) = self.user_agent {
            let value = HeaderValue::from_str(&user_agent).map_err(|e| {
                SwapError::request(format!("invalid user agent {user_agent:?}: {e}"))
            })?;
            headers.insert(USER_AGENT, value);
        }
        if !headers.contains_key(USER_AGENT) {
            let user_agent = format!("zos-swap-client/{}", env!("CARGO_PKG_VERSION"));
            let value = HeaderValue::from_str(&user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("zos-swap-client"));
            headers.insert(USER_AGENT, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| SwapError::request(format!("failed to configure HTTP client: {e}")))?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let token = match self.auth_token {
            Some(token) => TokenStore::with_token(token),
            None => TokenStore::new(),
        };

        debug!(
            base_url = %base_url,
            timeout_ms = self.timeout.as_millis() as u64,
            "swap client configured"
        );

        Ok(SwapClient {
            http_client: client,
            base_url,
            timeout: self.timeout,
            token,
        })
    }
}

/// Parse and check a base URL. Endpoint paths are appended to its path, so
/// it must be able to hold one and must not carry a query or fragment.
fn parse_base_url(raw: &str) -> Result<Url, SwapError> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(SwapError::request(format!("base URL cannot hold a path: {raw}")));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(SwapError::request(format!(
            "base URL must not have a query or fragment: {raw}"
        )));
    }
    Ok(url)
}

impl Default for SwapClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// SwapApi trait implementation.

impl SwapApi for SwapClient {
    async fn get_currencies(&self) -> Result<Vec<Currency>, SwapError> {
        SwapClient::get_currencies(self).await
    }

    async fn get_exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        amount: Decimal,
    ) -> Result<ExchangeEstimate, SwapError> {
        SwapClient::get_exchange_rate(self, from_currency, to_currency, amount).await
    }

    async fn get_exchange_range(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ExchangeRange, SwapError> {
        SwapClient::get_exchange_range(self, from_currency, to_currency).await
    }

    async fn create_exchange(
        &self,
        request: &CreateExchangeRequest,
    ) -> Result<CreateExchangeResponse, SwapError> {
        SwapClient::create_exchange(self, request).await
    }

    async fn get_exchange_status(&self, swap_id: &str) -> Result<SwapStatusResponse, SwapError> {
        SwapClient::get_exchange_status(self, swap_id).await
    }

    async fn get_swap_history(&self) -> Result<Vec<Swap>, SwapError> {
        SwapClient::get_swap_history(self).await
    }

    async fn get_swap_details(&self, swap_id: &str) -> Result<Swap, SwapError> {
        SwapClient::get_swap_details(self, swap_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let client = SwapClient::new().unwrap();
        assert_eq!(client.base_url(), "https://zos.computer/");
        assert_eq!(client.timeout(), Duration::from_millis(10_000));
        assert!(client.auth_token().is_none());
    }

    #[test]
    fn test_endpoint_url_joins_without_double_slash() {
        let client = SwapClient::builder().base_url("https://api.test.com/").build().unwrap();
        let url = client.endpoint_url(endpoints::CURRENCIES, None).unwrap();
        assert_eq!(url.as_str(), "https://api.test.com/swap/currencies");

        let client = SwapClient::builder().base_url("https://api.test.com/v1").build().unwrap();
        let url = client.endpoint_url(endpoints::HISTORY, None).unwrap();
        assert_eq!(url.as_str(), "https://api.test.com/v1/swap/history");
    }

    #[test]
    fn test_endpoint_url_encodes_id_segment() {
        let client = SwapClient::new().unwrap();
        let url = client.endpoint_url(endpoints::STATUS, Some("a/b?c")).unwrap();
        assert_eq!(url.path(), "/swap/status/a%2Fb%3Fc");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_endpoint_url_keeps_prefix_with_trailing_slash() {
        let client = SwapClient::builder().base_url("https://api.test.com/api/").build().unwrap();
        let url = client.endpoint_url(endpoints::DETAILS, Some("abc")).unwrap();
        assert_eq!(url.as_str(), "https://api.test.com/api/swap/abc");
    }

    #[test]
    fn test_invalid_base_url_is_request_error() {
        for base_url in ["not a url", "mailto:ops@zos.computer"] {
            let err = SwapClient::builder().base_url(base_url).build().unwrap_err();
            assert!(err.is_request(), "{base_url}: {err:?}");
            assert!(err.message().starts_with("Request error: "));
        }
    }

    #[test]
    fn test_base_url_with_query_or_fragment_is_rejected() {
        for base_url in ["https://api.test.com/?v=1", "https://api.test.com/v1#top"] {
            let err = SwapClient::builder().base_url(base_url).build().unwrap_err();
            assert!(err.is_request(), "{base_url}: {err:?}");
            assert!(err.message().contains("query or fragment"));
        }
    }

    #[test]
    fn test_invalid_user_agent_is_request_error() {
        let err = SwapClient::builder()
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();
        assert!(err.is_request());
        assert!(err.message().contains("invalid user agent"));
    }

    #[test]
    fn test_token_accessors() {
        let client = SwapClient::new().unwrap();
        assert!(client.auth_token().is_none());

        client.set_auth_token("jwt-1");
        assert_eq!(client.auth_token().as_deref(), Some("jwt-1"));

        client.set_auth_token(String::from("jwt-2"));
        assert_eq!(client.auth_token().as_deref(), Some("jwt-2"));

        client.clear_auth_token();
        assert!(client.auth_token().is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let client = SwapClient::builder().auth_token("super-secret").build().unwrap();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("has_token: true"));
        assert!(!debug_str.contains("super-secret"));
    }
}
