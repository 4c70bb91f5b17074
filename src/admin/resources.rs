//! Protected resources of a resource server.

use crate::admin::{required_id, resource_server_path, segment};
use crate::client::{Client, Response};
use crate::types::ResourceRepresentation;
use crate::Result;

/// Client for the resources of one client's resource server.
///
/// Access via `admin.realm("first").resources(id)`.
#[derive(Clone)]
pub struct ResourcesClient {
    client: Client,
    realm: String,
    client_id: String,
}

impl ResourcesClient {
    pub(crate) fn new(client: Client, realm: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            client,
            realm: realm.into(),
            client_id: client_id.into(),
        }
    }

    fn collection(&self) -> Result<String> {
        Ok(format!("{}/resource", resource_server_path(&self.realm, &self.client_id)?))
    }

    fn item(&self, id: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection()?, segment(id)?))
    }

    /// Lists the resource server's resources.
    pub async fn list(&self) -> Result<Response<Vec<ResourceRepresentation>>> {
        self.client.inner().get(&self.collection()?).await
    }

    /// Creates a resource. The server echoes it back with its new `_id`.
    pub async fn create(&self, resource: &ResourceRepresentation) -> Result<Response<ResourceRepresentation>> {
        self.client.inner().post_for(&self.collection()?, resource).await
    }

    /// Gets a resource by id.
    pub async fn get(&self, id: &str) -> Result<Response<ResourceRepresentation>> {
        self.client.inner().get(&self.item(id)?).await
    }

    /// Replaces a resource, addressed by `resource.id`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if `resource.id` is `None`.
    pub async fn update(&self, resource: &ResourceRepresentation) -> Result<Response> {
        let id = required_id(&resource.id, "resource")?;
        self.client.inner().put(&self.item(id)?, resource).await
    }

    /// Deletes a resource by id.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        self.client.inner().delete(&self.item(id)?).await
    }
}

impl std::fmt::Debug for ResourcesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourcesClient")
            .field("realm", &self.realm)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
