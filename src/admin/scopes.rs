//! Authorization scopes of a resource server.

use crate::admin::{required_id, resource_server_path, segment};
use crate::client::{Client, Response};
use crate::types::ScopeRepresentation;
use crate::Result;

/// Client for the authorization scopes of one client's resource server.
///
/// Access via `admin.realm("first").scopes(id)`, where `id` is the internal
/// id of a client with authorization services enabled.
#[derive(Clone)]
pub struct ScopesClient {
    client: Client,
    realm: String,
    client_id: String,
}

impl ScopesClient {
    pub(crate) fn new(client: Client, realm: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            client,
            realm: realm.into(),
            client_id: client_id.into(),
        }
    }

    fn collection(&self) -> Result<String> {
        Ok(format!("{}/scope", resource_server_path(&self.realm, &self.client_id)?))
    }

    fn item(&self, id: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection()?, segment(id)?))
    }

    /// Lists the resource server's scopes.
    pub async fn list(&self) -> Result<Response<Vec<ScopeRepresentation>>> {
        self.client.inner().get(&self.collection()?).await
    }

    /// Creates a scope. The server echoes it back with its new id.
    pub async fn create(&self, scope: &ScopeRepresentation) -> Result<Response<ScopeRepresentation>> {
        self.client.inner().post_for(&self.collection()?, scope).await
    }

    /// Gets a scope by id.
    pub async fn get(&self, id: &str) -> Result<Response<ScopeRepresentation>> {
        self.client.inner().get(&self.item(id)?).await
    }

    /// Replaces a scope, addressed by `scope.id`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if `scope.id` is `None`.
    pub async fn update(&self, scope: &ScopeRepresentation) -> Result<Response> {
        let id = required_id(&scope.id, "scope")?;
        self.client.inner().put(&self.item(id)?, scope).await
    }

    /// Deletes a scope by id.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        self.client.inner().delete(&self.item(id)?).await
    }
}

impl std::fmt::Debug for ScopesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopesClient")
            .field("realm", &self.realm)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
