//! Realm, role, and client scenarios.

use keycloak_admin::types::{ClientRepresentation, RealmRepresentation, RoleRepresentation};
use keycloak_admin::ErrorKind;
use reqwest::StatusCode;

use crate::common::{TestFixture, admin_client};

#[tokio::test]
async fn test_server_info() {
    let admin = admin_client().await.expect("admin client");

    let res = admin.server_info().get().await.expect("server info");
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.body().system_info.as_ref().and_then(|s| s.version.as_ref()).is_some());
}

#[tokio::test]
async fn test_create_delete_realm_first() {
    let admin = admin_client().await.expect("admin client");
    let realms = admin.realms();

    // Leftover from an aborted run
    let _ = realms.delete("first").await;

    let res = realms
        .create(&RealmRepresentation {
            enabled: Some(true),
            ..RealmRepresentation::new("first")
        })
        .await
        .expect("create realm");
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.location().expect("Location header").ends_with("/admin/realms/first"));

    let conflict = realms.create(&RealmRepresentation::new("first")).await.expect("create twice");
    assert_eq!(conflict.status(), StatusCode::CONFLICT);

    let listed = realms.list().await.expect("list realms").into_body();
    assert!(listed.iter().any(|r| r.realm.as_deref() == Some("first")));

    assert_eq!(realms.delete("first").await.expect("delete").status(), StatusCode::NO_CONTENT);
    assert_eq!(realms.delete("first").await.expect("delete again").status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_fresh_realm_has_default_roles() {
    let fixture = TestFixture::create("roles").await.expect("fixture");

    let roles = fixture.admin.realm(&fixture.realm).roles().list(None).await.expect("list roles");
    assert_eq!(roles.status(), StatusCode::OK);

    let names: Vec<_> = roles.body().iter().filter_map(|r| r.name.as_deref()).collect();
    assert!(names.contains(&"offline_access"), "roles: {:?}", names);
    assert!(names.contains(&"uma_authorization"), "roles: {:?}", names);

    fixture.cleanup().await.expect("cleanup");
}

#[tokio::test]
async fn test_update_realm() {
    let fixture = TestFixture::create("update").await.expect("fixture");
    let realms = fixture.admin.realms();

    let mut realm = realms.get(&fixture.realm).await.expect("get realm").into_body();
    realm.display_name = Some("Updated".into());
    assert_eq!(realms.update(&realm).await.expect("update").status(), StatusCode::NO_CONTENT);

    let fetched = realms.get(&fixture.realm).await.expect("get realm").into_body();
    assert_eq!(fetched.display_name.as_deref(), Some("Updated"));

    let config = realms.get_config(&fixture.realm).await.expect("uma config").into_body();
    assert!(config.issuer.expect("issuer").ends_with(&fixture.realm));

    fixture.cleanup().await.expect("cleanup");
}

#[tokio::test]
async fn test_client_and_client_roles() {
    let fixture = TestFixture::create("clients").await.expect("fixture");
    let realm = fixture.admin.realm(&fixture.realm);
    let clients = realm.clients();

    let res = clients
        .create(&ClientRepresentation {
            service_accounts_enabled: Some(true),
            ..ClientRepresentation::new("billing")
        })
        .await
        .expect("create client");
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = res.created_id().expect("client id").to_string();

    let client = clients.get(&id).await.expect("get client").into_body();
    assert_eq!(client.client_id.as_deref(), Some("billing"));

    let secret = clients.get_secret(&id).await.expect("secret").into_body();
    let regenerated = clients.regenerate_secret(&id).await.expect("regenerate").into_body();
    assert_ne!(secret.value, regenerated.value);

    let res = clients
        .create_role(&id, &RoleRepresentation::new("reader"))
        .await
        .expect("create role");
    assert_eq!(res.status(), StatusCode::CREATED);
    let roles = clients.list_roles(&id).await.expect("list roles").into_body();
    assert!(roles.iter().any(|r| r.name.as_deref() == Some("reader")));

    let err = clients.delete(&id).await.expect_err("delete is not offered");
    assert_eq!(err.kind(), ErrorKind::Unsupported);

    fixture.cleanup().await.expect("cleanup");
}
