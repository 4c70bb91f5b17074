//! Per-resource services of the admin REST API.
//!
//! Each service is a thin, cloneable handle over a [`Client`](crate::Client)
//! with the URL templates of one resource. Every method maps to exactly one
//! HTTP request, and the raw status is always returned in the
//! [`Response`](crate::Response).
//!
//! | Service | Access | Base path |
//! |---|---|---|
//! | [`RealmsClient`] | `admin.realms()` | `admin/realms` |
//! | [`ClientsClient`] | `admin.realm(r).clients()` | `admin/realms/{r}/clients` |
//! | [`ClientRolesClient`] | `admin.realm(r).client_roles(id)` | `.../clients/{id}/roles` |
//! | [`ClientScopesClient`] | `admin.realm(r).client_scopes()` | `admin/realms/{r}/client-scopes` |
//! | [`UsersClient`] | `admin.realm(r).users()` | `admin/realms/{r}/users` |
//! | [`GroupsClient`] | `admin.realm(r).groups()` | `admin/realms/{r}/groups` |
//! | [`RolesClient`] | `admin.realm(r).roles()` | `admin/realms/{r}/roles` |
//! | [`ScopesClient`] | `admin.realm(r).scopes(id)` | `.../clients/{id}/authz/resource-server/scope` |
//! | [`ResourcesClient`] | `admin.realm(r).resources(id)` | `.../authz/resource-server/resource` |
//! | [`PoliciesClient`] | `admin.realm(r).policies(id)` | `.../authz/resource-server/policy` |
//! | [`PermissionsClient`] | `admin.realm(r).permissions(id)` | `.../authz/resource-server/permission` |
//! | [`ServerInfoClient`] | `admin.server_info()` | `admin/serverinfo` |

mod client_roles;
mod client_scopes;
mod clients;
mod groups;
mod permissions;
mod policies;
mod realms;
mod resources;
mod roles;
mod scopes;
mod server_info;
mod users;

pub use client_roles::ClientRolesClient;
pub use client_scopes::ClientScopesClient;
pub use clients::ClientsClient;
pub use groups::GroupsClient;
pub use permissions::PermissionsClient;
pub use policies::PoliciesClient;
pub use realms::RealmsClient;
pub use resources::ResourcesClient;
pub use roles::RolesClient;
pub use scopes::ScopesClient;
pub use server_info::ServerInfoClient;
pub use users::UsersClient;

use std::borrow::Cow;

use crate::{Error, Result};

/// Percent-encodes a caller-supplied value for use as one path segment.
///
/// Empty values and the dot segments `.` and `..` are rejected: URL
/// resolution would drop them and address a parent collection instead.
pub(crate) fn segment(value: &str) -> Result<Cow<'_, str>> {
    match value {
        "" => Err(Error::invalid_argument("path value must not be empty")),
        "." | ".." => Err(Error::invalid_argument(format!(
            "path value {:?} is a dot segment",
            value
        ))),
        _ => Ok(urlencoding::encode(value)),
    }
}

/// `admin/realms/{realm}`
pub(crate) fn realm_path(realm: &str) -> Result<String> {
    Ok(format!("admin/realms/{}", segment(realm)?))
}

/// `admin/realms/{realm}/clients/{client_id}/authz/resource-server`
pub(crate) fn resource_server_path(realm: &str, client_id: &str) -> Result<String> {
    Ok(format!(
        "{}/clients/{}/authz/resource-server",
        realm_path(realm)?,
        segment(client_id)?
    ))
}

/// Returns the identifier a URL needs, or fails before anything is sent.
pub(crate) fn required_id<'a>(id: &'a Option<String>, record: &'static str) -> Result<&'a str> {
    id.as_deref().ok_or_else(|| Error::missing_id(record))
}
