//! Roles defined on a single client.

use crate::admin::{realm_path, required_id, segment};
use crate::client::{Client, Response};
use crate::options::{PageOptions, with_query};
use crate::types::{GroupRepresentation, RoleRepresentation, UserRepresentation};
use crate::Result;

/// Client for the roles of one registered client.
///
/// Access via `admin.realm("first").client_roles(id)`, where `id` is the
/// client's internal id. Roles are addressed by name, except for the
/// `*_by_id` operations.
#[derive(Clone)]
pub struct ClientRolesClient {
    client: Client,
    realm: String,
    client_id: String,
}

impl ClientRolesClient {
    pub(crate) fn new(client: Client, realm: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            client,
            realm: realm.into(),
            client_id: client_id.into(),
        }
    }

    /// Returns the realm name.
    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Returns the internal id of the client owning the roles.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    fn collection(&self) -> Result<String> {
        Ok(format!("{}/clients/{}/roles", realm_path(&self.realm)?, segment(&self.client_id)?))
    }

    fn item(&self, name: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection()?, segment(name)?))
    }

    fn by_id(&self, role_id: &str) -> Result<String> {
        Ok(format!(
            "{}/roles-by-id/{}?client={}",
            realm_path(&self.realm)?,
            segment(role_id)?,
            urlencoding::encode(&self.client_id)
        ))
    }

    /// Creates a role on the client.
    pub async fn create(&self, role: &RoleRepresentation) -> Result<Response> {
        self.client.inner().post(&self.collection()?, role).await
    }

    /// Lists the client's roles.
    pub async fn list(&self) -> Result<Response<Vec<RoleRepresentation>>> {
        self.client.inner().get(&self.collection()?).await
    }

    /// Gets a role by name.
    pub async fn get(&self, name: &str) -> Result<Response<RoleRepresentation>> {
        self.client.inner().get(&self.item(name)?).await
    }

    /// Replaces a role, addressed by `role.name`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if `role.name` is `None`.
    pub async fn update(&self, role: &RoleRepresentation) -> Result<Response> {
        let name = required_id(&role.name, "role")?;
        self.client.inner().put(&self.item(name)?, role).await
    }

    /// Deletes a role by name.
    pub async fn delete(&self, name: &str) -> Result<Response> {
        self.client.inner().delete(&self.item(name)?).await
    }

    /// Lists users holding the role.
    pub async fn users(
        &self,
        name: &str,
        options: Option<&PageOptions>,
    ) -> Result<Response<Vec<UserRepresentation>>> {
        let path = with_query(format!("{}/users", self.item(name)?), options);
        self.client.inner().get(&path).await
    }

    /// Lists groups holding the role.
    pub async fn groups(
        &self,
        name: &str,
        options: Option<&PageOptions>,
    ) -> Result<Response<Vec<GroupRepresentation>>> {
        let path = with_query(format!("{}/groups", self.item(name)?), options);
        self.client.inner().get(&path).await
    }

    /// Makes `roles` children of the named composite role.
    pub async fn add_composites(&self, name: &str, roles: &[RoleRepresentation]) -> Result<Response> {
        let path = format!("{}/composites", self.item(name)?);
        self.client.inner().post(&path, roles).await
    }

    /// Lists the children of a composite role.
    pub async fn list_composites(&self, name: &str) -> Result<Response<Vec<RoleRepresentation>>> {
        let path = format!("{}/composites", self.item(name)?);
        self.client.inner().get(&path).await
    }

    /// Removes `roles` from the named composite role.
    pub async fn remove_composites(&self, name: &str, roles: &[RoleRepresentation]) -> Result<Response> {
        let path = format!("{}/composites", self.item(name)?);
        self.client.inner().delete_with(&path, roles).await
    }

    /// Gets a role of this client by role id.
    pub async fn get_by_id(&self, role_id: &str) -> Result<Response<RoleRepresentation>> {
        self.client.inner().get(&self.by_id(role_id)?).await
    }

    /// Deletes a role of this client by role id.
    pub async fn delete_by_id(&self, role_id: &str) -> Result<Response> {
        self.client.inner().delete(&self.by_id(role_id)?).await
    }
}

impl std::fmt::Debug for ClientRolesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRolesClient")
            .field("realm", &self.realm)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
