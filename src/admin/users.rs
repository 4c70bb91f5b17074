//! User management.

use crate::admin::{realm_path, required_id, segment};
use crate::client::{Client, Response};
use crate::options::{ExecuteActionsEmailOptions, SendVerifyEmailOptions, UsersListOptions, with_query};
use crate::types::{CredentialRepresentation, GroupRepresentation, RoleRepresentation, UserRepresentation};
use crate::Result;

/// Client for the users of a realm.
///
/// Access via `admin.realm("first").users()`. Users are addressed by id.
///
/// ## Example
///
/// ```rust,ignore
/// let users = admin.realm("first").users();
///
/// let res = users.create(&UserRepresentation {
///     enabled: Some(true),
///     ..UserRepresentation::new("alice")
/// }).await?;
/// let id = res.created_id().unwrap().to_string();
///
/// users.reset_password(&id, &CredentialRepresentation::password("s3cret", false)).await?;
/// users.join_group(&id, &group_id).await?;
/// ```
#[derive(Clone)]
pub struct UsersClient {
    client: Client,
    realm: String,
}

impl UsersClient {
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
        Ok(format!("{}/users", realm_path(&self.realm)?))
    }

    fn item(&self, id: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection()?, segment(id)?))
    }

    fn realm_role_mappings(&self, id: &str) -> Result<String> {
        Ok(format!("{}/role-mappings/realm", self.item(id)?))
    }

    fn client_role_mappings(&self, id: &str, client_id: &str) -> Result<String> {
        Ok(format!("{}/role-mappings/clients/{}", self.item(id)?, segment(client_id)?))
    }

    /// Creates a user.
    pub async fn create(&self, user: &UserRepresentation) -> Result<Response> {
        self.client.inner().post(&self.collection()?, user).await
    }

    /// Lists users, optionally filtered and paged.
    pub async fn list(&self, options: Option<&UsersListOptions>) -> Result<Response<Vec<UserRepresentation>>> {
        let path = with_query(self.collection()?, options);
        self.client.inner().get(&path).await
    }

    /// Gets a user by id.
    pub async fn get(&self, id: &str) -> Result<Response<UserRepresentation>> {
        self.client.inner().get(&self.item(id)?).await
    }

    /// Finds users by username. The server matches substrings unless the
    /// name is an exact match, so the result may hold more than one user.
    pub async fn get_by_username(&self, username: &str) -> Result<Response<Vec<UserRepresentation>>> {
        let options = UsersListOptions::new().username(username);
        self.list(Some(&options)).await
    }

    /// Replaces a user, addressed by `user.id`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if `user.id` is `None`.
    pub async fn update(&self, user: &UserRepresentation) -> Result<Response> {
        let id = required_id(&user.id, "user")?;
        self.client.inner().put(&self.item(id)?, user).await
    }

    /// Deletes a user by id.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        self.client.inner().delete(&self.item(id)?).await
    }

    /// Sets a user's password.
    pub async fn reset_password(&self, id: &str, credential: &CredentialRepresentation) -> Result<Response> {
        let path = format!("{}/reset-password", self.item(id)?);
        self.client.inner().put(&path, credential).await
    }

    /// Adds a user to a group.
    pub async fn join_group(&self, id: &str, group_id: &str) -> Result<Response> {
        let path = format!("{}/groups/{}", self.item(id)?, segment(group_id)?);
        self.client.inner().put_empty(&path).await
    }

    /// Removes a user from a group.
    pub async fn leave_group(&self, id: &str, group_id: &str) -> Result<Response> {
        let path = format!("{}/groups/{}", self.item(id)?, segment(group_id)?);
        self.client.inner().delete(&path).await
    }

    /// Lists the groups a user belongs to.
    pub async fn list_groups(&self, id: &str) -> Result<Response<Vec<GroupRepresentation>>> {
        let path = format!("{}/groups", self.item(id)?);
        self.client.inner().get(&path).await
    }

    /// Grants realm roles to a user.
    pub async fn add_realm_roles(&self, id: &str, roles: &[RoleRepresentation]) -> Result<Response> {
        self.client.inner().post(&self.realm_role_mappings(id)?, roles).await
    }

    /// Revokes realm roles from a user.
    pub async fn remove_realm_roles(&self, id: &str, roles: &[RoleRepresentation]) -> Result<Response> {
        self.client.inner().delete_with(&self.realm_role_mappings(id)?, roles).await
    }

    /// Lists realm roles granted directly to a user.
    pub async fn list_realm_roles(&self, id: &str) -> Result<Response<Vec<RoleRepresentation>>> {
        self.client.inner().get(&self.realm_role_mappings(id)?).await
    }

    /// Grants roles of the client with internal id `client_id` to a user.
    pub async fn add_client_roles(
        &self,
        id: &str,
        client_id: &str,
        roles: &[RoleRepresentation],
    ) -> Result<Response> {
        self.client.inner().post(&self.client_role_mappings(id, client_id)?, roles).await
    }

    /// Revokes client roles from a user.
    pub async fn remove_client_roles(
        &self,
        id: &str,
        client_id: &str,
        roles: &[RoleRepresentation],
    ) -> Result<Response> {
        self.client.inner().delete_with(&self.client_role_mappings(id, client_id)?, roles).await
    }

    /// Lists a client's roles granted directly to a user.
    pub async fn list_client_roles(
        &self,
        id: &str,
        client_id: &str,
    ) -> Result<Response<Vec<RoleRepresentation>>> {
        self.client.inner().get(&self.client_role_mappings(id, client_id)?).await
    }

    /// Emails the user a link to verify their address.
    pub async fn send_verify_email(
        &self,
        id: &str,
        options: Option<&SendVerifyEmailOptions>,
    ) -> Result<Response> {
        let path = with_query(format!("{}/send-verify-email", self.item(id)?), options);
        self.client.inner().put_empty(&path).await
    }

    /// Emails the user a link to perform required actions such as
    /// `UPDATE_PASSWORD` or `VERIFY_EMAIL`.
    pub async fn execute_actions_email(
        &self,
        id: &str,
        actions: &[String],
        options: Option<&ExecuteActionsEmailOptions>,
    ) -> Result<Response> {
        let path = with_query(format!("{}/execute-actions-email", self.item(id)?), options);
        self.client.inner().put(&path, actions).await
    }
}

impl std::fmt::Debug for UsersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersClient").field("realm", &self.realm).finish_non_exhaustive()
    }
}
