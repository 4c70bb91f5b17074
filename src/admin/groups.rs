//! Group management.

use crate::admin::{realm_path, required_id, segment};
use crate::client::{Client, Response};
use crate::options::{GroupsListOptions, PageOptions, with_query};
use crate::types::{GroupRepresentation, RoleRepresentation, UserRepresentation};
use crate::Result;

/// Client for the groups of a realm.
///
/// Access via `admin.realm("first").groups()`. Groups are addressed by id.
#[derive(Clone)]
pub struct GroupsClient {
    client: Client,
    realm: String,
}

impl GroupsClient {
    pub(crate) fn new(client: Client, realm: impl Into<String>) -> Self {
        Self {
            client,
            realm: realm.into(),
        }
    }

    fn collection(&self) -> Result<String> {
        Ok(format!("{}/groups", realm_path(&self.realm)?))
    }

    fn item(&self, id: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection()?, segment(id)?))
    }

    /// Creates a top-level group.
    pub async fn create(&self, group: &GroupRepresentation) -> Result<Response> {
        self.client.inner().post(&self.collection()?, group).await
    }

    /// Lists top-level groups, optionally filtered and paged.
    pub async fn list(&self, options: Option<&GroupsListOptions>) -> Result<Response<Vec<GroupRepresentation>>> {
        let path = with_query(self.collection()?, options);
        self.client.inner().get(&path).await
    }

    /// Gets a group by id.
    pub async fn get(&self, id: &str) -> Result<Response<GroupRepresentation>> {
        self.client.inner().get(&self.item(id)?).await
    }

    /// Replaces a group, addressed by `group.id`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// without sending anything if `group.id` is `None`.
    pub async fn update(&self, group: &GroupRepresentation) -> Result<Response> {
        let id = required_id(&group.id, "group")?;
        self.client.inner().put(&self.item(id)?, group).await
    }

    /// Deletes a group and its subgroups.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        self.client.inner().delete(&self.item(id)?).await
    }

    /// Lists a group's direct members.
    pub async fn members(
        &self,
        id: &str,
        options: Option<&PageOptions>,
    ) -> Result<Response<Vec<UserRepresentation>>> {
        let path = with_query(format!("{}/members", self.item(id)?), options);
        self.client.inner().get(&path).await
    }

    /// Grants realm roles to every member of a group.
    pub async fn add_realm_roles(&self, id: &str, roles: &[RoleRepresentation]) -> Result<Response> {
        let path = format!("{}/role-mappings/realm", self.item(id)?);
        self.client.inner().post(&path, roles).await
    }

    /// Revokes realm roles from a group.
    pub async fn remove_realm_roles(&self, id: &str, roles: &[RoleRepresentation]) -> Result<Response> {
        let path = format!("{}/role-mappings/realm", self.item(id)?);
        self.client.inner().delete_with(&path, roles).await
    }
}

impl std::fmt::Debug for GroupsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupsClient").field("realm", &self.realm).finish_non_exhaustive()
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
    use crate::ErrorKind;
    use crate::admin::test_support::mock_client;

    async fn groups(server: &MockServer) -> GroupsClient {
        mock_client(server).await.realm("first").groups()
    }

    #[tokio::test]
    async fn test_create_and_list_with_options() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/realms/first/groups"))
            .and(body_json(json!({"name": "staff"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/admin/realms/first/groups"))
            .and(query_param("search", "sta"))
            .and(query_param("briefRepresentation", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "g-1",
                "name": "staff",
                "subGroups": [{"id": "g-2", "name": "ops", "path": "/staff/ops"}]
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let groups = groups(&server).await;
        assert_eq!(
            groups.create(&GroupRepresentation::new("staff")).await.unwrap().status(),
            StatusCode::CREATED
        );

        let options = GroupsListOptions::new().search("sta").brief_representation(true);
        let list = groups.list(Some(&options)).await.unwrap().into_body();
        let sub = &list[0].sub_groups.as_ref().unwrap()[0];
        assert_eq!(sub.path.as_deref(), Some("/staff/ops"));
    }

    #[tokio::test]
    async fn test_get_update_delete() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/first/groups/g-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g-1", "name": "staff"})))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/admin/realms/first/groups/g-1"))
            .and(body_json(json!({"id": "g-1", "name": "employees"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/admin/realms/first/groups/g-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let groups = groups(&server).await;
        let mut group = groups.get("g-1").await.unwrap().into_body();
        group.name = Some("employees".into());
        assert_eq!(groups.update(&group).await.unwrap().status(), StatusCode::NO_CONTENT);
        assert_eq!(groups.delete("g-1").await.unwrap().status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_update_without_id_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("PUT")).respond_with(ResponseTemplate::new(204)).expect(0).mount(&server).await;

        let err = groups(&server).await.update(&GroupRepresentation::new("staff")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_members_and_role_mappings() {
        let server = MockServer::start().await;
        let mappings = "/admin/realms/first/groups/g-1/role-mappings/realm";
        let body = json!([{"id": "r-1", "name": "reader"}]);

        Mock::given(method("GET"))
            .and(path("/admin/realms/first/groups/g-1/members"))
            .and(query_param("first", "0"))
            .and(query_param("max", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "u-1", "username": "alice"}])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(mappings))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(mappings))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let groups = groups(&server).await;
        let members = groups
            .members("g-1", Some(&PageOptions::new().first(0).max(100)))
            .await
            .unwrap()
            .into_body();
        assert_eq!(members[0].username.as_deref(), Some("alice"));

        let roles = vec![RoleRepresentation {
            id: Some("r-1".into()),
            ..RoleRepresentation::new("reader")
        }];
        groups.add_realm_roles("g-1", &roles).await.unwrap();
        groups.remove_realm_roles("g-1", &roles).await.unwrap();
    }
}
