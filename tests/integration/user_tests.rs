//! User and group scenarios.

use keycloak_admin::options::UsersListOptions;
use keycloak_admin::types::{CredentialRepresentation, GroupRepresentation, UserRepresentation};
use reqwest::StatusCode;

use crate::common::TestFixture;

#[tokio::test]
async fn test_user_round_trip() {
    let fixture = TestFixture::create("users").await.expect("fixture");
    let users = fixture.admin.realm(&fixture.realm).users();

    let submitted = UserRepresentation {
        enabled: Some(true),
        email: Some("alice@example.com".into()),
        first_name: Some("Alice".into()),
        ..UserRepresentation::new("alice")
    };
    let res = users.create(&submitted).await.expect("create user");
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = res.created_id().expect("user id").to_string();

    let fetched = users.get(&id).await.expect("get user").into_body();
    assert_eq!(fetched.username, submitted.username);
    assert_eq!(fetched.email, submitted.email);
    assert_eq!(fetched.first_name, submitted.first_name);
    assert_eq!(fetched.enabled, submitted.enabled);

    let by_name = users.get_by_username("alice").await.expect("by username").into_body();
    assert_eq!(by_name.len(), 1);

    let options = UsersListOptions::new().email("alice@example.com").exact(true);
    assert_eq!(users.list(Some(&options)).await.expect("list").body().len(), 1);

    let res = users
        .reset_password(&id, &CredentialRepresentation::password("s3cret-pass", false))
        .await
        .expect("reset password");
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    assert_eq!(users.delete(&id).await.expect("delete").status(), StatusCode::NO_CONTENT);
    assert_eq!(users.delete(&id).await.expect("delete again").status(), StatusCode::NOT_FOUND);

    fixture.cleanup().await.expect("cleanup");
}

#[tokio::test]
async fn test_group_membership_and_roles() {
    let fixture = TestFixture::create("groups").await.expect("fixture");
    let realm = fixture.admin.realm(&fixture.realm);
    let users = realm.users();
    let groups = realm.groups();

    let user_id = users
        .create(&UserRepresentation::new("bob"))
        .await
        .expect("create user")
        .created_id()
        .expect("user id")
        .to_string();
    let group_id = groups
        .create(&GroupRepresentation::new("staff"))
        .await
        .expect("create group")
        .created_id()
        .expect("group id")
        .to_string();

    assert_eq!(users.join_group(&user_id, &group_id).await.expect("join").status(), StatusCode::NO_CONTENT);
    let members = groups.members(&group_id, None).await.expect("members").into_body();
    assert_eq!(members[0].id.as_deref(), Some(user_id.as_str()));

    let offline = realm.roles().get_by_name("offline_access").await.expect("role").into_body();
    users.add_realm_roles(&user_id, std::slice::from_ref(&offline)).await.expect("grant");
    let granted = users.list_realm_roles(&user_id).await.expect("list grants").into_body();
    assert!(granted.iter().any(|r| r.id == offline.id));
    users.remove_realm_roles(&user_id, std::slice::from_ref(&offline)).await.expect("revoke");

    assert_eq!(users.leave_group(&user_id, &group_id).await.expect("leave").status(), StatusCode::NO_CONTENT);
    assert!(users.list_groups(&user_id).await.expect("groups").body().is_empty());

    fixture.cleanup().await.expect("cleanup");
}
