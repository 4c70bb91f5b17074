//! Authorization policies of a resource server.

use crate::admin::{resource_server_path, segment};
use crate::client::{Client, Response};
use crate::types::{
    GroupPolicyRepresentation, PolicyRepresentation, RolePolicyRepresentation, UserPolicyRepresentation,
};
use crate::Result;

/// Client for the policies of one client's resource server.
///
/// Access via `admin.realm("first").policies(id)`. Permissions share the
/// server's policy store but are managed through
/// [`PermissionsClient`](crate::admin::PermissionsClient).
///
/// ## Example
///
/// ```rust,ignore
/// let policies = admin.realm("first").policies(&client_id);
///
/// let policy = policies.create_role_policy(&RolePolicyRepresentation {
///     policy: PolicyRepresentation {
///         logic: Some(Logic::Positive),
///         ..PolicyRepresentation::new("readers only")
///     },
///     roles: Some(vec![RoleDefinition { id: Some(role_id), required: Some(true) }]),
/// }).await?.into_body();
/// ```
#[derive(Clone)]
pub struct PoliciesClient {
    client: Client,
    realm: String,
    client_id: String,
}

impl PoliciesClient {
    pub(crate) fn new(client: Client, realm: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            client,
            realm: realm.into(),
            client_id: client_id.into(),
        }
    }

    fn collection(&self) -> Result<String> {
        Ok(format!("{}/policy", resource_server_path(&self.realm, &self.client_id)?))
    }

    fn typed(&self, kind: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection()?, kind))
    }

    /// Lists policies, excluding permissions.
    pub async fn list(&self) -> Result<Response<Vec<PolicyRepresentation>>> {
        let path = format!("{}?permission=false", self.collection()?);
        self.client.inner().get(&path).await
    }

    /// Creates a policy granting access to specific users.
    pub async fn create_user_policy(
        &self,
        policy: &UserPolicyRepresentation,
    ) -> Result<Response<UserPolicyRepresentation>> {
        self.client.inner().post_for(&self.typed("user")?, policy).await
    }

    /// Creates a policy granting access to holders of roles.
    pub async fn create_role_policy(
        &self,
        policy: &RolePolicyRepresentation,
    ) -> Result<Response<RolePolicyRepresentation>> {
        self.client.inner().post_for(&self.typed("role")?, policy).await
    }

    /// Creates a policy granting access to members of groups.
    pub async fn create_group_policy(
        &self,
        policy: &GroupPolicyRepresentation,
    ) -> Result<Response<GroupPolicyRepresentation>> {
        self.client.inner().post_for(&self.typed("group")?, policy).await
    }

    /// Gets any policy or permission by id, in its common shape.
    pub async fn get(&self, id: &str) -> Result<Response<PolicyRepresentation>> {
        let path = format!("{}/{}", self.collection()?, segment(id)?);
        self.client.inner().get(&path).await
    }

    /// Deletes a policy by id.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        let path = format!("{}/{}", self.collection()?, segment(id)?);
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for PoliciesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoliciesClient")
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
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::admin::test_support::mock_client;
    use crate::types::{DecisionStrategy, GroupDefinition, Logic, RoleDefinition};

    const POLICIES: &str = "/admin/realms/first/clients/c-1/authz/resource-server/policy";

    async fn policies(server: &MockServer) -> PoliciesClient {
        mock_client(server).await.realm("first").policies("c-1")
    }

    #[tokio::test]
    async fn test_list_excludes_permissions() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(POLICIES))
            .and(query_param("permission", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "p-1",
                "name": "Default Policy",
                "type": "js",
                "logic": "POSITIVE",
                "decisionStrategy": "UNANIMOUS"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let list = policies(&server).await.list().await.unwrap().into_body();
        assert_eq!(list[0].policy_type.as_deref(), Some("js"));
        assert_eq!(list[0].logic, Some(Logic::Positive));
        assert_eq!(list[0].decision_strategy, Some(DecisionStrategy::Unanimous));
    }

    #[tokio::test]
    async fn test_create_user_policy() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{}/user", POLICIES)))
            .and(body_json(json!({"name": "alice only", "users": ["u-1"]})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "p-2",
                "name": "alice only",
                "type": "user",
                "logic": "POSITIVE",
                "users": ["u-1"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let policy = UserPolicyRepresentation {
            policy: PolicyRepresentation::new("alice only"),
            users: Some(vec!["u-1".into()]),
        };
        let created = policies(&server).await.create_user_policy(&policy).await.unwrap().into_body();
        assert_eq!(created.policy.id.as_deref(), Some("p-2"));
        assert_eq!(created.users, policy.users);
    }

    #[tokio::test]
    async fn test_create_role_policy() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{}/role", POLICIES)))
            .and(body_json(json!({
                "name": "readers",
                "logic": "NEGATIVE",
                "roles": [{"id": "r-1", "required": true}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "p-3",
                "name": "readers",
                "type": "role",
                "roles": [{"id": "r-1", "required": true}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let policy = RolePolicyRepresentation {
            policy: PolicyRepresentation {
                logic: Some(Logic::Negative),
                ..PolicyRepresentation::new("readers")
            },
            roles: Some(vec![RoleDefinition {
                id: Some("r-1".into()),
                required: Some(true),
            }]),
        };
        let created = policies(&server).await.create_role_policy(&policy).await.unwrap().into_body();
        assert_eq!(created.policy.policy_type.as_deref(), Some("role"));
        assert_eq!(created.roles, policy.roles);
    }

    #[tokio::test]
    async fn test_create_group_policy() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{}/group", POLICIES)))
            .and(body_json(json!({
                "name": "staff",
                "groupsClaim": "groups",
                "groups": [{"id": "g-1", "extendChildren": true}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "p-4",
                "name": "staff",
                "type": "group",
                "groups": [{"id": "g-1", "path": "/staff", "extendChildren": true}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let policy = GroupPolicyRepresentation {
            policy: PolicyRepresentation::new("staff"),
            groups_claim: Some("groups".into()),
            groups: Some(vec![GroupDefinition {
                id: Some("g-1".into()),
                path: None,
                extend_children: Some(true),
            }]),
        };
        let created = policies(&server).await.create_group_policy(&policy).await.unwrap().into_body();
        let groups = created.groups.unwrap();
        assert_eq!(groups[0].path.as_deref(), Some("/staff"));
    }

    #[tokio::test]
    async fn test_get_and_delete() {
        let server = MockServer::start().await;
        let item = format!("{}/p-2", POLICIES);

        Mock::given(method("GET"))
            .and(path(item.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p-2", "type": "user"})))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(item.as_str()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let policies = policies(&server).await;
        assert_eq!(policies.get("p-2").await.unwrap().body().policy_type.as_deref(), Some("user"));
        assert_eq!(policies.delete("p-2").await.unwrap().status(), StatusCode::NO_CONTENT);
    }
}
