//! Prelude module for convenient imports.
//!
//! ```rust
//! use keycloak_admin::prelude::*;
//! ```
//!
//! This provides access to:
//! - The client, its builder, and the realm handle
//! - Error types
//! - Token providers
//! - List options
//! - Every representation type

pub use crate::{
    auth::{StaticTokenProvider, TokenProvider},
    client::{Client, ClientBuilder, RealmClient, Response},
    error::{Error, ErrorKind, Result},
    options::{
        ExecuteActionsEmailOptions, GroupsListOptions, PageOptions, QueryOptions, RolesListOptions,
        SendVerifyEmailOptions, UsersListOptions,
    },
    types::*,
};
