//! Client builder with typestate pattern.

use std::{fmt, marker::PhantomData, sync::Arc, time::Duration};

use url::Url;

use super::inner::ClientInner;
use crate::{
    Client, Error,
    auth::{StaticTokenProvider, TokenProvider},
    user_agent,
};

/// Marker type: base URL not yet provided.
pub struct NoUrl;

/// Marker type: base URL has been provided.
pub struct HasUrl;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern so `build()` is only available once a base URL
/// has been supplied.
///
/// ## Required Configuration
///
/// - `url()`: The server root, e.g. `http://localhost:8080/`. Request paths
///   such as `admin/realms` are resolved against it, so it must end with `/`
///   when it carries a path (`http://host/auth/`, not `http://host/auth`).
///
/// ## Optional Configuration
///
/// - `http_client()`: A pre-configured `reqwest::Client`
/// - `bearer_token()` / `token_provider()`: Credentials for each request
/// - `timeout()`: Per-request timeout
/// - `user_agent()`: User-Agent for the built-in HTTP client
///
/// ## Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use keycloak_admin::Client;
///
/// let admin = Client::builder()
///     .url("http://localhost:8080/")
///     .bearer_token(access_token)
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct ClientBuilder<UrlState> {
    url: Option<String>,
    http_client: Option<reqwest::Client>,
    token_provider: Option<Arc<dyn TokenProvider>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    _url_state: PhantomData<UrlState>,
}

impl ClientBuilder<NoUrl> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            http_client: None,
            token_provider: None,
            timeout: None,
            user_agent: None,
            _url_state: PhantomData,
        }
    }

    /// Sets the base URL of the server.
    ///
    /// The URL is parsed by [`build`](ClientBuilder::build). A missing
    /// trailing slash is reported when the first request is built.
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl> {
        ClientBuilder {
            url: Some(url.into()),
            http_client: self.http_client,
            token_provider: self.token_provider,
            timeout: self.timeout,
            user_agent: self.user_agent,
            _url_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ClientBuilder<U> {
    /// Uses the given `reqwest::Client` for every exchange.
    ///
    /// Use this to share a connection pool, set default headers, or
    /// configure TLS. [`user_agent`](ClientBuilder::user_agent) has no
    /// effect when a client is supplied.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sends the given access token as `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer_token(self, token: impl Into<String>) -> Self {
        self.token_provider(StaticTokenProvider::new(token))
    }

    /// Asks `provider` for a token before each request.
    ///
    /// Requests that already carry an `Authorization` header are sent as-is.
    #[must_use]
    pub fn token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.token_provider = Some(Arc::new(provider));
        self
    }

    /// Sets the per-request timeout.
    ///
    /// Without a timeout a request waits until the server answers or the
    /// caller drops the future.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the User-Agent sent by the built-in HTTP client.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl ClientBuilder<HasUrl> {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Configuration`](crate::ErrorKind::Configuration) if:
    /// - The URL cannot be parsed or cannot serve as a base for relative paths
    /// - The built-in HTTP client cannot be created
    pub fn build(self) -> Result<Client, Error> {
        let raw = self.url.ok_or_else(|| Error::configuration("URL is required"))?;

        let base_url = Url::parse(&raw).map_err(|e| {
            Error::configuration(format!("invalid base URL {:?}: {}", raw, e)).with_source(e)
        })?;

        if base_url.cannot_be_a_base() {
            return Err(Error::configuration(format!(
                "base URL {:?} cannot be used to resolve request paths",
                raw
            )));
        }

        let http = match self.http_client {
            Some(http) => http,
            None => {
                let agent = match self.user_agent.as_deref() {
                    Some(agent) => agent,
                    None => user_agent::user_agent(),
                };
                reqwest::Client::builder().user_agent(agent).build().map_err(|e| {
                    Error::configuration(format!("failed to create HTTP client: {}", e))
                        .with_source(e)
                })?
            },
        };

        let inner = ClientInner {
            base_url,
            http,
            token_provider: self.token_provider,
            timeout: self.timeout,
        };

        Ok(Client::from_inner(inner))
    }
}

impl<U> fmt::Debug for ClientBuilder<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("url", &self.url)
            .field("has_http_client", &self.http_client.is_some())
            .field("has_token_provider", &self.token_provider.is_some())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
