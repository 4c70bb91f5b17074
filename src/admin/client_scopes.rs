//! Client scope management.

use crate::admin::{realm_path, required_id, segment};
use crate::client::{Client, Response};
use crate::types::ClientScopeRepresentation;
use crate::Result;

/// Client for the client scopes of a realm.
///
/// Access via `admin.realm("first").client_scopes()`.
#[derive(Clone)]
pub struct ClientScopesClient {
    client: Client,
    realm: String,
}

impl ClientScopesClient {
    pub(crate) fn new(client: Client, realm: impl Into<String>) -> Self {
        Self {
            client,
            realm: realm.into(),
        }
    }

    fn collection(&self) -> Result<String> {
        Ok(format!("{}/client-scopes", realm_path(&self.realm)?))
    }

    fn item(&self, id: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection()?, segment(id)?))
    }

    /// Lists the realm's client scopes.
    pub async fn list(&self) -> Result<Response<Vec<ClientScopeRepresentation>>> {
        self.client.inner().get(&self.collection()?).await
    }

    /// Creates a client scope.
    pub async fn create(&self, scope: &ClientScopeRepresentation) -> Result<Response> {
        self.client.inner().post(&self.collection()?, scope).await
    }

    /// Gets a client scope by id.
    pub async fn get(&self, id: &str) -> Result<Response<ClientScopeRepresentation>> {
        self.client.inner().get(&self.item(id)?).await
    }

    /// Replaces a client scope, addressed by `scope.id`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if `scope.id` is `None`.
    pub async fn update(&self, scope: &ClientScopeRepresentation) -> Result<Response> {
        let id = required_id(&scope.id, "client scope")?;
        self.client.inner().put(&self.item(id)?, scope).await
    }

    /// Deletes a client scope by id.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        self.client.inner().delete(&self.item(id)?).await
    }
}

impl std::fmt::Debug for ClientScopesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientScopesClient").field("realm", &self.realm).finish_non_exhaustive()
    }
}
