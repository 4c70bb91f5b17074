//! Realm management.

use crate::admin::{realm_path, required_id, segment};
use crate::client::{Client, Response};
use crate::types::{RealmRepresentation, Uma2Configuration};
use crate::Result;

/// Client for realm operations.
///
/// Access via `admin.realms()`. Realms are addressed by name.
///
/// ## Example
///
/// ```rust,ignore
/// let realms = admin.realms();
///
/// let res = realms.create(&RealmRepresentation {
///     enabled: Some(true),
///     ..RealmRepresentation::new("first")
/// }).await?;
/// assert_eq!(res.status(), StatusCode::CREATED);
///
/// let realm = realms.get("first").await?.into_body();
/// ```
#[derive(Clone)]
pub struct RealmsClient {
    client: Client,
}

impl RealmsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a realm. The server answers `201 Created` with a `Location`
    /// ending in `/admin/realms/{name}`.
    pub async fn create(&self, realm: &RealmRepresentation) -> Result<Response> {
        self.client.inner().post("admin/realms", realm).await
    }

    /// Lists every realm visible to the caller.
    pub async fn list(&self) -> Result<Response<Vec<RealmRepresentation>>> {
        self.client.inner().get("admin/realms").await
    }

    /// Gets a realm by name.
    pub async fn get(&self, name: &str) -> Result<Response<RealmRepresentation>> {
        self.client.inner().get(&realm_path(name)?).await
    }

    /// Replaces a realm's settings.
    ///
    /// The realm is addressed by `realm.realm`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if `realm.realm` is `None`.
    pub async fn update(&self, realm: &RealmRepresentation) -> Result<Response> {
        let name = required_id(&realm.realm, "realm")?;
        self.client.inner().put(&realm_path(name)?, realm).await
    }

    /// Deletes a realm and everything in it.
    pub async fn delete(&self, name: &str) -> Result<Response> {
        self.client.inner().delete(&realm_path(name)?).await
    }

    /// Gets the realm's UMA 2.0 discovery document.
    ///
    /// This is a public endpoint outside the admin API
    /// (`realms/{name}/.well-known/uma2-configuration`).
    pub async fn get_config(&self, name: &str) -> Result<Response<Uma2Configuration>> {
        let path = format!("realms/{}/.well-known/uma2-configuration", segment(name)?);
        self.client.inner().get(&path).await
    }
}

impl std::fmt::Debug for RealmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealmsClient").finish_non_exhaustive()
    }
}
