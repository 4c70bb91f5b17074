//! Client types for talking to the admin REST API.
//!
//! The crate uses a hierarchical client structure:
//! - [`Client`]: Top-level client, owns the base URL, HTTP transport, and credentials
//! - [`RealmClient`]: Realm-scoped navigation to the per-resource services
//! - Per-resource services ([`UsersClient`](crate::admin::UsersClient),
//!   [`RolesClient`](crate::admin::RolesClient), ...) that map one method to one request
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keycloak_admin::prelude::*;
//!
//! let admin = Client::builder()
//!     .url("http://localhost:8080/")
//!     .bearer_token(access_token)
//!     .build()?;
//!
//! admin.realms().create(&RealmRepresentation::new("first")).await?;
//! let roles = admin.realm("first").roles().list(None).await?.into_body();
//! ```

mod builder;
mod inner;
mod response;

pub use builder::{ClientBuilder, HasUrl, NoUrl};
pub use response::Response;

use std::sync::Arc;

use reqwest::{Method, Request};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::Result;
use crate::admin::{
    ClientRolesClient, ClientScopesClient, ClientsClient, GroupsClient, PermissionsClient,
    PoliciesClient, RealmsClient, ResourcesClient, RolesClient, ScopesClient, ServerInfoClient,
    UsersClient,
};

/// The admin API client.
///
/// This is the main entry point. Create a client with [`Client::builder()`],
/// then navigate to realm-scoped services with [`Client::realm`].
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. Clones share the underlying
/// connection pool and configuration.
///
/// ## Example
///
/// ```rust,ignore
/// use keycloak_admin::Client;
///
/// let admin = Client::builder()
///     .url("http://localhost:8080/")
///     .bearer_token(token)
///     .build()?;
///
/// let admin2 = admin.clone();
/// tokio::spawn(async move {
///     let users = admin2.realm("first").users().list(None).await?;
///     // ...
/// });
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<NoUrl> {
        ClientBuilder::new()
    }

    /// Creates a client for `base_url` with default settings and no credentials.
    ///
    /// Equivalent to `Client::builder().url(base_url).build()`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Configuration`](crate::ErrorKind::Configuration)
    /// if the URL cannot be parsed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder().url(base_url).build()
    }

    /// Returns the service for realm collection operations.
    pub fn realms(&self) -> RealmsClient {
        RealmsClient::new(self.clone())
    }

    /// Returns a realm-scoped client.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let realm = admin.realm("first");
    /// let groups = realm.groups().list(None).await?;
    /// ```
    pub fn realm(&self, name: impl Into<String>) -> RealmClient {
        RealmClient {
            client: self.clone(),
            name: name.into(),
        }
    }

    /// Returns the service for server-wide information.
    pub fn server_info(&self) -> ServerInfoClient {
        ServerInfoClient::new(self.clone())
    }

    /// Returns the base URL every request path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Builds a request for `path`, resolved against the base URL.
    ///
    /// With a body, the body is encoded as JSON and `Content-Type:
    /// application/json` is set. Without one, the request has neither. A path
    /// with a leading `/` replaces the base URL's path.
    ///
    /// # Errors
    ///
    /// - [`Configuration`](crate::ErrorKind::Configuration): the base URL has a
    ///   path that does not end with `/`
    /// - [`InvalidRequest`](crate::ErrorKind::InvalidRequest): `path` cannot be
    ///   resolved into a URL
    /// - [`Serialization`](crate::ErrorKind::Serialization): `body` cannot be
    ///   encoded as JSON
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let req = admin.build_request(Method::GET, "admin/realms", None::<&()>)?;
    /// let res: Response<Vec<RealmRepresentation>> = admin.execute(req).await?;
    /// ```
    pub fn build_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        self.inner.build_request(method, path, body)
    }

    /// Sends a request and decodes the response body as JSON into `T`.
    ///
    /// The body is decoded whatever the status, so an error payload must fit
    /// `T` too; use [`serde_json::Value`] when unsure. The status is reported
    /// on the returned [`Response`] and never turned into an error.
    ///
    /// # Errors
    ///
    /// - Transport failures ([`Connection`](crate::ErrorKind::Connection),
    ///   [`Timeout`](crate::ErrorKind::Timeout), [`Transport`](crate::ErrorKind::Transport))
    /// - [`Unauthorized`](crate::ErrorKind::Unauthorized): the token provider failed
    /// - [`Decode`](crate::ErrorKind::Decode): the body is not valid JSON for
    ///   `T`; [`Error::status`](crate::Error::status) carries the HTTP status
    pub async fn execute<T>(&self, request: Request) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.inner.execute(request).await
    }

    /// Sends a request without reading the response body.
    ///
    /// # Errors
    ///
    /// Same transport and credential errors as [`execute`](Client::execute).
    pub async fn send(&self, request: Request) -> Result<Response> {
        self.inner.send(request).await
    }

    /// Creates a client from the inner implementation.
    pub(crate) fn from_inner(inner: inner::ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns a reference to the inner client.
    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

/// A realm-scoped client.
///
/// Hands out the per-resource services of one realm. Services bound to a
/// registered client (its roles and its authorization settings) take the
/// client's internal id, not its `clientId`.
#[derive(Clone)]
pub struct RealmClient {
    client: Client,
    name: String,
}

impl RealmClient {
    /// Returns the service for the realm's registered clients.
    pub fn clients(&self) -> ClientsClient {
        ClientsClient::new(self.client.clone(), self.name.clone())
    }

    /// Returns the service for roles defined by one registered client.
    ///
    /// `client_id` is the internal id (`ClientRepresentation::id`).
    pub fn client_roles(&self, client_id: impl Into<String>) -> ClientRolesClient {
        ClientRolesClient::new(self.client.clone(), self.name.clone(), client_id.into())
    }

    /// Returns the service for the realm's client scopes.
    pub fn client_scopes(&self) -> ClientScopesClient {
        ClientScopesClient::new(self.client.clone(), self.name.clone())
    }

    /// Returns the service for the realm's users.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.client.clone(), self.name.clone())
    }

    /// Returns the service for the realm's groups.
    pub fn groups(&self) -> GroupsClient {
        GroupsClient::new(self.client.clone(), self.name.clone())
    }

    /// Returns the service for realm-level roles.
    pub fn roles(&self) -> RolesClient {
        RolesClient::new(self.client.clone(), self.name.clone())
    }

    /// Returns the authorization scope service of a resource-server client.
    pub fn scopes(&self, client_id: impl Into<String>) -> ScopesClient {
        ScopesClient::new(self.client.clone(), self.name.clone(), client_id.into())
    }

    /// Returns the protected resource service of a resource-server client.
    pub fn resources(&self, client_id: impl Into<String>) -> ResourcesClient {
        ResourcesClient::new(self.client.clone(), self.name.clone(), client_id.into())
    }

    /// Returns the policy service of a resource-server client.
    pub fn policies(&self, client_id: impl Into<String>) -> PoliciesClient {
        PoliciesClient::new(self.client.clone(), self.name.clone(), client_id.into())
    }

    /// Returns the permission service of a resource-server client.
    pub fn permissions(&self, client_id: impl Into<String>) -> PermissionsClient {
        PermissionsClient::new(self.client.clone(), self.name.clone(), client_id.into())
    }

    /// Returns the realm name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for RealmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealmClient").field("name", &self.name).finish_non_exhaustive()
    }
}
