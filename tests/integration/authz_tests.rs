//! Authorization services scenarios.

use keycloak_admin::types::{
    ClientRepresentation, DecisionStrategy, PolicyRepresentation, ResourcePermissionRepresentation,
    ResourceRepresentation, RoleDefinition, RolePolicyRepresentation, RoleRepresentation, ScopeRepresentation,
};
use reqwest::StatusCode;

use crate::common::TestFixture;

#[tokio::test]
async fn test_resource_server_lifecycle() {
    let fixture = TestFixture::create("authz").await.expect("fixture");
    let realm = fixture.admin.realm(&fixture.realm);

    let client_id = realm
        .clients()
        .create(&ClientRepresentation {
            public_client: Some(false),
            service_accounts_enabled: Some(true),
            authorization_services_enabled: Some(true),
            ..ClientRepresentation::new("billing")
        })
        .await
        .expect("create client")
        .created_id()
        .expect("client id")
        .to_string();

    let scope = realm
        .scopes(&client_id)
        .create(&ScopeRepresentation::new("read"))
        .await
        .expect("create scope")
        .into_body();
    assert!(scope.id.is_some());

    let resource = realm
        .resources(&client_id)
        .create(&ResourceRepresentation {
            uris: Some(vec!["/invoices/*".into()]),
            scopes: Some(vec![scope.clone()]),
            ..ResourceRepresentation::new("invoice")
        })
        .await
        .expect("create resource")
        .into_body();
    let resource_id = resource.id.clone().expect("resource id");

    let roles = realm.roles();
    roles.create(&RoleRepresentation::new("accountant")).await.expect("create role");
    let role = roles.get_by_name("accountant").await.expect("get role").into_body();

    let policy = realm
        .policies(&client_id)
        .create_role_policy(&RolePolicyRepresentation {
            policy: PolicyRepresentation::new("accountants"),
            roles: Some(vec![RoleDefinition {
                id: role.id.clone(),
                required: Some(true),
            }]),
        })
        .await
        .expect("create policy")
        .into_body();
    let policy_id = policy.policy.id.clone().expect("policy id");

    let permissions = realm.permissions(&client_id);
    let permission = permissions
        .create_resource_permission(&ResourcePermissionRepresentation {
            permission: PolicyRepresentation {
                resources: Some(vec![resource_id.clone()]),
                policies: Some(vec![policy_id.clone()]),
                decision_strategy: Some(DecisionStrategy::Affirmative),
                ..PolicyRepresentation::new("invoice access")
            },
            resource_type: None,
        })
        .await
        .expect("create permission")
        .into_body();
    let permission_id = permission.permission.id.clone().expect("permission id");

    let listed = permissions.list().await.expect("list permissions").into_body();
    assert!(listed.iter().any(|p| p.id.as_deref() == Some(permission_id.as_str())));

    let policies = realm.policies(&client_id).list().await.expect("list policies").into_body();
    assert!(policies.iter().any(|p| p.id.as_deref() == Some(policy_id.as_str())));
    assert!(policies.iter().all(|p| p.id.as_deref() != Some(permission_id.as_str())));

    assert_eq!(
        permissions.delete(&permission_id).await.expect("delete permission").status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        realm.resources(&client_id).delete(&resource_id).await.expect("delete resource").status(),
        StatusCode::NO_CONTENT
    );

    fixture.cleanup().await.expect("cleanup");
}
