//! Representations exchanged with the admin API.
//!
//! Every record mirrors the server's JSON representation: camelCase keys,
//! every field optional, unset fields omitted on the wire. Server-assigned
//! identifiers are `None` on records the caller builds for create requests.
//!
//! - [`RealmRepresentation`], [`Uma2Configuration`]
//! - [`ClientRepresentation`], [`ClientScopeRepresentation`]
//! - [`RoleRepresentation`], [`UserRepresentation`], [`CredentialRepresentation`],
//!   [`GroupRepresentation`]
//! - Authorization services: [`ScopeRepresentation`], [`ResourceRepresentation`],
//!   [`PolicyRepresentation`] and its typed variants, permissions
//! - [`DecisionStrategy`], [`Logic`]
//! - [`ServerInfoRepresentation`]

mod authz;
mod client;
mod decision;
mod group;
mod realm;
mod role;
mod server_info;
mod user;

pub use authz::{
    GroupDefinition, GroupPolicyRepresentation, PermissionRepresentation, PolicyRepresentation,
    ResourceOwnerRepresentation, ResourcePermissionRepresentation, ResourceRepresentation,
    RoleDefinition, RolePolicyRepresentation, ScopePermissionRepresentation, ScopeRepresentation,
    UserPolicyRepresentation,
};
pub use client::{ClientRepresentation, ClientScopeRepresentation};
pub use decision::{DecisionStrategy, Logic};
pub use group::GroupRepresentation;
pub use realm::{
    IdentityProviderMapperRepresentation, IdentityProviderRepresentation, RealmRepresentation,
    Uma2Configuration,
};
pub use role::RoleRepresentation;
pub use server_info::{
    CryptoInfoRepresentation, MemoryInfoRepresentation, ProfileInfoRepresentation,
    ServerInfoRepresentation, SystemInfoRepresentation,
};
pub use user::{CredentialRepresentation, UserRepresentation};
