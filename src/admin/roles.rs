//! Realm role management.

use crate::admin::{realm_path, required_id, segment};
use crate::client::{Client, Response};
use crate::options::{RolesListOptions, with_query};
use crate::types::RoleRepresentation;
use crate::Result;

/// Client for the realm-level roles of a realm.
///
/// Access via `admin.realm("first").roles()`. Roles are addressed by name,
/// or by id through the `*_by_id` operations.
#[derive(Clone)]
pub struct RolesClient {
    client: Client,
    realm: String,
}

impl RolesClient {
    pub(crate) fn new(client: Client, realm: impl Into<String>) -> Self {
        Self {
            client,
            realm: realm.into(),
        }
    }

    fn collection(&self) -> Result<String> {
        Ok(format!("{}/roles", realm_path(&self.realm)?))
    }

    fn item(&self, name: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection()?, segment(name)?))
    }

    fn by_id(&self, id: &str) -> Result<String> {
        Ok(format!("{}/roles-by-id/{}", realm_path(&self.realm)?, segment(id)?))
    }

    /// Creates a realm role.
    pub async fn create(&self, role: &RoleRepresentation) -> Result<Response> {
        self.client.inner().post(&self.collection()?, role).await
    }

    /// Lists realm roles, optionally filtered and paged.
    pub async fn list(&self, options: Option<&RolesListOptions>) -> Result<Response<Vec<RoleRepresentation>>> {
        let path = with_query(self.collection()?, options);
        self.client.inner().get(&path).await
    }

    /// Gets a realm role by name.
    pub async fn get_by_name(&self, name: &str) -> Result<Response<RoleRepresentation>> {
        self.client.inner().get(&self.item(name)?).await
    }

    /// Replaces a realm role, addressed by `role.name`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if `role.name` is `None`.
    pub async fn update(&self, role: &RoleRepresentation) -> Result<Response> {
        let name = required_id(&role.name, "role")?;
        self.client.inner().put(&self.item(name)?, role).await
    }

    /// Deletes a realm role by name.
    pub async fn delete(&self, name: &str) -> Result<Response> {
        self.client.inner().delete(&self.item(name)?).await
    }

    /// Gets any role by id.
    pub async fn get_by_id(&self, id: &str) -> Result<Response<RoleRepresentation>> {
        self.client.inner().get(&self.by_id(id)?).await
    }

    /// Gets a role of the client with internal id `client_id` by role id.
    pub async fn get_client_role_by_id(
        &self,
        client_id: &str,
        id: &str,
    ) -> Result<Response<RoleRepresentation>> {
        let path = format!("{}?client={}", self.by_id(id)?, urlencoding::encode(client_id));
        self.client.inner().get(&path).await
    }

    /// Deletes a role of the client with internal id `client_id` by role id.
    pub async fn delete_client_role_by_id(&self, client_id: &str, id: &str) -> Result<Response> {
        let path = format!("{}?client={}", self.by_id(id)?, urlencoding::encode(client_id));
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for RolesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RolesClient").field("realm", &self.realm).finish_non_exhaustive()
    }
}
