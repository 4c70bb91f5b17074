//! Registered client management.

use crate::admin::{ClientRolesClient, realm_path, required_id, segment};
use crate::client::{Client, Response};
use crate::options::PageOptions;
use crate::types::{ClientRepresentation, CredentialRepresentation, RoleRepresentation, UserRepresentation};
use crate::{Error, Result};

/// Client for the registered clients of a realm.
///
/// Access via `admin.realm("first").clients()`. Clients are addressed by
/// their internal `id`, not their OAuth2 `clientId`.
///
/// ## Example
///
/// ```rust,ignore
/// let clients = admin.realm("first").clients();
///
/// let res = clients.create(&ClientRepresentation::new("billing")).await?;
/// let id = res.created_id().unwrap().to_string();
///
/// let secret = clients.get_secret(&id).await?.into_body();
/// ```
#[derive(Clone)]
pub struct ClientsClient {
    client: Client,
    realm: String,
}

impl ClientsClient {
    pub(crate) fn new(client: Client, realm: impl Into<String>) -> Self {
        Self {
            client,
            realm: realm.into(),
        }
    }

    /// Returns the realm name.
    pub fn realm(&self) -> &str {
        &self.realm
    }

    fn collection(&self) -> Result<String> {
        Ok(format!("{}/clients", realm_path(&self.realm)?))
    }

    fn item(&self, id: &str) -> Result<String> {
        Ok(format!("{}/clients/{}", realm_path(&self.realm)?, segment(id)?))
    }

    fn roles(&self, id: &str) -> ClientRolesClient {
        ClientRolesClient::new(self.client.clone(), self.realm.clone(), id)
    }

    /// Lists the realm's clients.
    pub async fn list(&self) -> Result<Response<Vec<ClientRepresentation>>> {
        self.client.inner().get(&self.collection()?).await
    }

    /// Registers a client. The new internal id is the final segment of the
    /// `Location` header; see [`Response::created_id`].
    pub async fn create(&self, client: &ClientRepresentation) -> Result<Response> {
        self.client.inner().post(&self.collection()?, client).await
    }

    /// Gets a client by internal id.
    pub async fn get(&self, id: &str) -> Result<Response<ClientRepresentation>> {
        self.client.inner().get(&self.item(id)?).await
    }

    /// Replaces a client's settings.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if `client.id` is `None`.
    pub async fn update(&self, client: &ClientRepresentation) -> Result<Response> {
        let id = required_id(&client.id, "client")?;
        self.client.inner().put(&self.item(id)?, client).await
    }

    /// Not offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`ErrorKind::Unsupported`](crate::ErrorKind::Unsupported)
    /// without contacting the server.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        Err(Error::unsupported(format!("deleting client {:?} is not supported", id)))
    }

    /// Creates a role on the client. Same as `client_roles(id).create(role)`.
    pub async fn create_role(&self, id: &str, role: &RoleRepresentation) -> Result<Response> {
        self.roles(id).create(role).await
    }

    /// Lists the client's roles. Same as `client_roles(id).list()`.
    pub async fn list_roles(&self, id: &str) -> Result<Response<Vec<RoleRepresentation>>> {
        self.roles(id).list().await
    }

    /// Lists users holding a client role. Same as
    /// `client_roles(id).users(role, options)`.
    pub async fn users_in_role(
        &self,
        id: &str,
        role: &str,
        options: Option<&PageOptions>,
    ) -> Result<Response<Vec<UserRepresentation>>> {
        self.roles(id).users(role, options).await
    }

    /// Gets the client's secret.
    pub async fn get_secret(&self, id: &str) -> Result<Response<CredentialRepresentation>> {
        let path = format!("{}/client-secret", self.item(id)?);
        self.client.inner().get(&path).await
    }

    /// Generates a new client secret, invalidating the old one.
    pub async fn regenerate_secret(&self, id: &str) -> Result<Response<CredentialRepresentation>> {
        let path = format!("{}/client-secret", self.item(id)?);
        self.client.inner().post_empty_for(&path).await
    }
}

impl std::fmt::Debug for ClientsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientsClient").field("realm", &self.realm).finish_non_exhaustive()
    }
}
