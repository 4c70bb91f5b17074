//! Common test harness for keycloak-admin integration tests.
//!
//! Obtains an admin token from the master realm and provides a fixture that
//! owns a throwaway realm.

use std::sync::Once;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use keycloak_admin::Client;
use keycloak_admin::types::RealmRepresentation;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

static TRACING: Once = Once::new();

static REALM_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Server base URL, always with a trailing slash.
pub fn base_url() -> String {
    let url = std::env::var("KEYCLOAK_URL").unwrap_or_else(|_| "http://localhost:8080/".to_string());
    if url.ends_with('/') { url } else { format!("{}/", url) }
}

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Fetches an admin access token with the password grant on `admin-cli`.
pub async fn admin_token() -> Result<String> {
    let username = std::env::var("KEYCLOAK_ADMIN").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("KEYCLOAK_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());
    let token_url = format!("{}realms/master/protocol/openid-connect/token", base_url());

    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "password")
        .append_pair("client_id", "admin-cli")
        .append_pair("username", &username)
        .append_pair("password", &password)
        .finish();

    let response = reqwest::Client::new()
        .post(&token_url)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(form)
        .send()
        .await
        .context(format!("Failed to reach {}. Is the server running?", token_url))?;

    if !response.status().is_success() {
        anyhow::bail!("Token request failed with status {}", response.status());
    }

    let token: TokenResponse = response.json().await.context("Failed to parse token response")?;
    Ok(token.access_token)
}

/// Builds an admin client authenticated as the master admin.
pub async fn admin_client() -> Result<Client> {
    init_tracing();
    let token = admin_token().await?;
    let client = Client::builder().url(base_url()).bearer_token(token).build()?;
    Ok(client)
}

/// Returns a realm name unique to this process.
pub fn unique_realm_name(prefix: &str) -> String {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.subsec_nanos()).unwrap_or(0);
    let n = REALM_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}-{}", prefix, std::process::id(), nanos, n)
}

/// A realm created for one test and deleted by [`TestFixture::cleanup`].
pub struct TestFixture {
    pub admin: Client,
    pub realm: String,
}

impl TestFixture {
    /// Creates a fresh, enabled realm.
    pub async fn create(prefix: &str) -> Result<Self> {
        let admin = admin_client().await?;
        let realm = unique_realm_name(prefix);

        let res = admin
            .realms()
            .create(&RealmRepresentation {
                enabled: Some(true),
                ..RealmRepresentation::new(realm.clone())
            })
            .await?;
        if res.status() != StatusCode::CREATED {
            anyhow::bail!("Creating realm {} returned {}", realm, res.status());
        }

        Ok(Self { admin, realm })
    }

    /// Deletes the fixture's realm.
    pub async fn cleanup(self) -> Result<()> {
        let res = self.admin.realms().delete(&self.realm).await?;
        if !res.is_success() {
            anyhow::bail!("Deleting realm {} returned {}", self.realm, res.status());
        }
        Ok(())
    }
}
