//! Permissions of a resource server.

use crate::admin::{required_id, resource_server_path, segment};
use crate::client::{Client, Response};
use crate::types::{PermissionRepresentation, ResourcePermissionRepresentation, ScopePermissionRepresentation};
use crate::Result;

/// Client for the permissions of one client's resource server.
///
/// Access via `admin.realm("first").permissions(id)`. A permission ties
/// resources or scopes to the policies that guard them.
#[derive(Clone)]
pub struct PermissionsClient {
    client: Client,
    realm: String,
    client_id: String,
}

impl PermissionsClient {
    pub(crate) fn new(client: Client, realm: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            client,
            realm: realm.into(),
            client_id: client_id.into(),
        }
    }

    fn collection(&self) -> Result<String> {
        Ok(format!("{}/permission", resource_server_path(&self.realm, &self.client_id)?))
    }

    fn typed(&self, kind: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection()?, kind))
    }

    fn typed_item(&self, kind: &str, id: &str) -> Result<String> {
        Ok(format!("{}/{}/{}", self.collection()?, kind, segment(id)?))
    }

    /// Lists every permission.
    pub async fn list(&self) -> Result<Response<Vec<PermissionRepresentation>>> {
        self.client.inner().get(&self.collection()?).await
    }

    /// Creates a resource-based permission.
    pub async fn create_resource_permission(
        &self,
        permission: &ResourcePermissionRepresentation,
    ) -> Result<Response<ResourcePermissionRepresentation>> {
        self.client.inner().post_for(&self.typed("resource")?, permission).await
    }

    /// Gets a resource-based permission by id.
    pub async fn get_resource_permission(&self, id: &str) -> Result<Response<ResourcePermissionRepresentation>> {
        self.client.inner().get(&self.typed_item("resource", id)?).await
    }

    /// Replaces a resource-based permission, addressed by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if the permission has no id.
    pub async fn update_resource_permission(
        &self,
        permission: &ResourcePermissionRepresentation,
    ) -> Result<Response> {
        let id = required_id(&permission.permission.id, "permission")?;
        self.client.inner().put(&self.typed_item("resource", id)?, permission).await
    }

    /// Creates a scope-based permission.
    pub async fn create_scope_permission(
        &self,
        permission: &ScopePermissionRepresentation,
    ) -> Result<Response<ScopePermissionRepresentation>> {
        self.client.inner().post_for(&self.typed("scope")?, permission).await
    }

    /// Gets a scope-based permission by id.
    pub async fn get_scope_permission(&self, id: &str) -> Result<Response<ScopePermissionRepresentation>> {
        self.client.inner().get(&self.typed_item("scope", id)?).await
    }

    /// Replaces a scope-based permission, addressed by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if the permission has no id.
    pub async fn update_scope_permission(&self, permission: &ScopePermissionRepresentation) -> Result<Response> {
        let id = required_id(&permission.permission.id, "permission")?;
        self.client.inner().put(&self.typed_item("scope", id)?, permission).await
    }

    /// Deletes a permission of either kind by id.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        let path = format!("{}/{}", self.collection()?, segment(id)?);
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for PermissionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionsClient")
            .field("realm", &self.realm)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod wiremock_tests {
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::ErrorKind;
    use crate::admin::test_support::mock_client;
    use crate::types::{DecisionStrategy, PolicyRepresentation};

    const PERMISSIONS: &str = "/admin/realms/first/clients/c-1/authz/resource-server/permission";

    async fn permissions(server: &MockServer) -> PermissionsClient {
        mock_client(server).await.realm("first").permissions("c-1")
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(PERMISSIONS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "pm-1", "name": "Default Permission", "type": "resource"},
                {"id": "pm-2", "name": "read invoices", "type": "scope"}
            ])))
            .mount(&server)
            .await;

        let list = permissions(&server).await.list().await.unwrap().into_body();
        let kinds: Vec<_> = list.iter().filter_map(|p| p.policy_type.as_deref()).collect();
        assert_eq!(kinds, vec!["resource", "scope"]);
    }

    #[tokio::test]
    async fn test_resource_permission_lifecycle() {
        let server = MockServer::start().await;
        let collection = format!("{}/resource", PERMISSIONS);
        let item = format!("{}/resource/pm-1", PERMISSIONS);

        Mock::given(method("POST"))
            .and(path(collection.as_str()))
            .and(body_json(json!({
                "name": "invoices",
                "resources": ["res-1"],
                "policies": ["p-3"],
                "decisionStrategy": "AFFIRMATIVE"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "pm-1",
                "name": "invoices",
                "type": "resource",
                "decisionStrategy": "AFFIRMATIVE"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(item.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pm-1",
                "name": "invoices",
                "resourceType": "urn:billing:resources:invoice"
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(item.as_str()))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let permissions = permissions(&server).await;
        let permission = ResourcePermissionRepresentation {
            permission: PermissionRepresentation {
                resources: Some(vec!["res-1".into()]),
                policies: Some(vec!["p-3".into()]),
                decision_strategy: Some(DecisionStrategy::Affirmative),
                ..PolicyRepresentation::new("invoices")
            },
            resource_type: None,
        };

        let created = permissions.create_resource_permission(&permission).await.unwrap().into_body();
        let id = created.permission.id.unwrap();

        let mut fetched = permissions.get_resource_permission(&id).await.unwrap().into_body();
        assert_eq!(fetched.resource_type.as_deref(), Some("urn:billing:resources:invoice"));

        fetched.permission.description = Some("All invoices".into());
        permissions.update_resource_permission(&fetched).await.unwrap();
    }

    #[tokio::test]
    async fn test_scope_permission_lifecycle() {
        let server = MockServer::start().await;
        let item = format!("{}/scope/pm-2", PERMISSIONS);

        Mock::given(method("POST"))
            .and(path(format!("{}/scope", PERMISSIONS)))
            .and(body_json(json!({"name": "read invoices", "scopes": ["s-1"], "policies": ["p-3"]})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"id": "pm-2", "name": "read invoices", "type": "scope"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(item.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pm-2", "name": "read invoices"})))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(item.as_str()))
            .and(body_json(json!({"id": "pm-2", "name": "read invoices", "logic": "NEGATIVE"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let permissions = permissions(&server).await;
        let permission = ScopePermissionRepresentation {
            permission: PermissionRepresentation {
                scopes: Some(vec!["s-1".into()]),
                policies: Some(vec!["p-3".into()]),
                ..PolicyRepresentation::new("read invoices")
            },
            resource_type: None,
        };

        let created = permissions.create_scope_permission(&permission).await.unwrap().into_body();
        assert_eq!(created.permission.policy_type.as_deref(), Some("scope"));

        let mut fetched = permissions.get_scope_permission("pm-2").await.unwrap().into_body();
        fetched.permission.logic = Some(crate::types::Logic::Negative);
        permissions.update_scope_permission(&fetched).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_without_id_and_delete() {
        let server = MockServer::start().await;

        Mock::given(method("PUT")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;
        Mock::given(method("DELETE"))
            .and(path(format!("{}/pm-1", PERMISSIONS)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let permissions = permissions(&server).await;
        let err = permissions
            .update_scope_permission(&ScopePermissionRepresentation::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert_eq!(permissions.delete("pm-1").await.unwrap().status(), StatusCode::NO_CONTENT);
    }
}
