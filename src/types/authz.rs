//! Authorization services representations: scopes, resources, policies, and
//! permissions of a resource-server client.
//!
//! Typed policies and permissions embed the common record with
//! `#[serde(flatten)]`, so the wire format is a single flat JSON object:
//!
//! ```rust
//! use keycloak_admin::types::{Logic, PolicyRepresentation, UserPolicyRepresentation};
//!
//! let policy = UserPolicyRepresentation {
//!     policy: PolicyRepresentation {
//!         logic: Some(Logic::Positive),
//!         ..PolicyRepresentation::new("only-alice")
//!     },
//!     users: Some(vec!["alice".into()]),
//! };
//! assert_eq!(
//!     serde_json::to_string(&policy).unwrap(),
//!     r#"{"name":"only-alice","logic":"POSITIVE","users":["alice"]}"#
//! );
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{DecisionStrategy, Logic};

/// An action that can be performed on a protected resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeRepresentation {
    /// Internal id, assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Scope name, e.g. `view` or `delete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Icon shown in the account console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_uri: Option<String>,
    /// Human-readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ScopeRepresentation {
    /// Creates a representation carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// The owner of a protected resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOwnerRepresentation {
    /// Owner id (user or client).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owner name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A protected resource of a resource server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRepresentation {
    /// Internal id, assigned by the server. Sent as `_id`.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name, unique per owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Resource type, grouping resources for type-level permissions.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// URIs the resource protects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    /// Scopes that apply to the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<ScopeRepresentation>>,
    /// Icon shown in the account console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_uri: Option<String>,
    /// Multi-valued custom attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, Vec<String>>>,
    /// Whether the owner can manage access to it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_managed_access: Option<bool>,
    /// Owner of the resource; the resource server itself when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<ResourceOwnerRepresentation>,
}

impl ResourceRepresentation {
    /// Creates a representation carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Fields shared by every policy and permission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRepresentation {
    /// Internal id, assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Policy name, unique per resource server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Policy type: `user`, `role`, `group`, `resource`, `scope`, ...
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    /// Ids of the policies a permission aggregates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<String>>,
    /// Ids of the resources a permission covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    /// Ids of the scopes a permission covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    /// Whether the result is inverted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logic: Option<Logic>,
    /// How aggregated policy results combine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_strategy: Option<DecisionStrategy>,
    /// Owner id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl PolicyRepresentation {
    /// Creates a representation carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A policy granting access to specific users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPolicyRepresentation {
    /// Common policy fields.
    #[serde(flatten)]
    pub policy: PolicyRepresentation,
    /// User ids or usernames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
}

/// A role referenced by a role policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Role id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether the role is mandatory for the policy to grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// A policy granting access to holders of specific roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePolicyRepresentation {
    /// Common policy fields.
    #[serde(flatten)]
    pub policy: PolicyRepresentation,
    /// Roles checked by the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<RoleDefinition>>,
}

/// A group referenced by a group policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDefinition {
    /// Group id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Group path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Whether membership of child groups also counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_children: Option<bool>,
}

/// A policy granting access to members of specific groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyRepresentation {
    /// Common policy fields.
    #[serde(flatten)]
    pub policy: PolicyRepresentation,
    /// Token claim holding group membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_claim: Option<String>,
    /// Groups checked by the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupDefinition>>,
}

/// A permission: binds policies to resources or scopes.
///
/// Permissions share the policy record; listing returns the common fields.
pub type PermissionRepresentation = PolicyRepresentation;

/// A permission over resources, or over every resource of a type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePermissionRepresentation {
    /// Common permission fields.
    #[serde(flatten)]
    pub permission: PermissionRepresentation,
    /// Resource type the permission applies to, instead of listed resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// A permission over scopes, optionally restricted to resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopePermissionRepresentation {
    /// Common permission fields.
    #[serde(flatten)]
    pub permission: PermissionRepresentation,
    /// Resource type the permission applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}
