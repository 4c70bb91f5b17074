//! Role representation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named permission label, defined at realm level or by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRepresentation {
    /// Internal id, assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Role name, unique within its container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the role aggregates other roles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<bool>,
    /// Whether the role belongs to a client rather than the realm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_role: Option<bool>,
    /// Id of the realm or client that owns the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    /// Multi-valued custom attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, Vec<String>>>,
}

impl RoleRepresentation {
    /// Creates a representation carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_role_builder() {
        let role = RoleRepresentation::new("auditor").with_description("Read-only access");
        assert_eq!(
            serde_json::to_value(&role).unwrap(),
            json!({"name": "auditor", "description": "Read-only access"})
        );
    }

    #[test]
    fn test_role_decodes_container_fields() {
        let role: RoleRepresentation = serde_json::from_value(json!({
            "id": "5b1e6a3c-7d8f-4a2b-9c0d-1e2f3a4b5c6d",
            "name": "offline_access",
            "composite": false,
            "clientRole": false,
            "containerId": "first",
            "attributes": {}
        }))
        .unwrap();
        assert_eq!(role.client_role, Some(false));
        assert_eq!(role.container_id.as_deref(), Some("first"));
        assert!(role.attributes.unwrap().is_empty());
    }
}
