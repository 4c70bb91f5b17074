//! Realm representation and the UMA discovery document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A realm: an isolated namespace of users, clients, roles, and settings.
///
/// Every field is optional. Unset fields are omitted from request bodies so
/// the server keeps its defaults on create and leaves them unchanged on
/// update.
///
/// ```rust
/// use keycloak_admin::types::RealmRepresentation;
///
/// let realm = RealmRepresentation {
///     enabled: Some(true),
///     ..RealmRepresentation::new("first")
/// };
/// assert_eq!(serde_json::to_string(&realm).unwrap(), r#"{"realm":"first","enabled":true}"#);
/// ```
///
/// Field names mirror the server's representation.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Realm name, used in every realm-scoped URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_refresh_token: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_max_reuse: Option<i32>,
    /// Access token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_lifespan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_lifespan_for_implicit_flow: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_session_idle_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_session_max_lifespan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_session_idle_timeout_remember_me: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_session_max_lifespan_remember_me: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_session_idle_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_session_max_lifespan_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_session_max_lifespan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_session_idle_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_session_max_lifespan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_offline_session_idle_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_offline_session_max_lifespan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code_lifespan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code_lifespan_user_action: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code_lifespan_login: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_token_generated_by_admin_lifespan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_token_generated_by_user_lifespan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `all`, `external`, or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_email_as_username: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_with_email_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_emails_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_password_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_username_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brute_force_protected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_lockout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_failure_wait_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_quick_login_wait_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_increment_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_login_check_milli_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delta_time_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_factor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_credentials: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_policy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_policy_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_policy_initial_counter: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_policy_digits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_policy_look_ahead_window: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_policy_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_supported_applications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_rp_entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_signature_algorithms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_rp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_attestation_conveyance_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_authenticator_attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_require_resident_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_user_verification_requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_create_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_avoid_same_authenticator_register: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_acceptable_aaguids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_rp_entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_signature_algorithms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_rp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_attestation_conveyance_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_authenticator_attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_require_resident_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_user_verification_requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_create_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_avoid_same_authenticator_register: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_authn_policy_passwordless_acceptable_aaguids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_security_headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_server: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_listeners: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_event_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_events_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_events_details_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_providers: Option<Vec<IdentityProviderRepresentation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_provider_mappers: Option<Vec<IdentityProviderMapperRepresentation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internationalization_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_locales: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_grant_flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_credentials_flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_authentication_flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_authentication_flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_managed_access_allowed: Option<bool>,
}

impl RealmRepresentation {
    /// Creates a representation naming the realm and nothing else.
    pub fn new(realm: impl Into<String>) -> Self {
        Self {
            realm: Some(realm.into()),
            ..Self::default()
        }
    }
}

/// An external identity provider configured in a realm.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    /// Provider type, e.g. `oidc`, `saml`, `github`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_token: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_broker_login_flow_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_broker_login_flow_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, String>>,
}

/// A mapper attached to an identity provider.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderMapperRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_provider_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_provider_mapper: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, String>>,
}

/// The realm's UMA 2.0 discovery document
/// (`realms/{realm}/.well-known/uma2-configuration`).
///
/// Keys are snake_case on the wire, unlike the admin representations.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Uma2Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introspection_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_session_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_types_supported: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_types_supported: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modes_supported: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_methods_supported: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_signing_alg_values_supported: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes_supported: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_registration_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_endpoint: Option<String>,
}
