//! # keycloak-admin
//!
//! Typed async client for the Keycloak admin REST API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keycloak_admin::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), keycloak_admin::Error> {
//!     let admin = Client::builder()
//!         .url("http://localhost:8080/")
//!         .bearer_token(std::env::var("KEYCLOAK_TOKEN").unwrap_or_default())
//!         .build()?;
//!
//!     let res = admin.realms().create(&RealmRepresentation {
//!         enabled: Some(true),
//!         ..RealmRepresentation::new("first")
//!     }).await?;
//!     println!("created: {}", res.status());
//!
//!     let users = admin.realm("first").users();
//!     let res = users.create(&UserRepresentation::new("alice")).await?;
//!     if let Some(id) = res.created_id() {
//!         let alice = users.get(id).await?.into_body();
//!         println!("{:?}", alice.username);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Client Hierarchy**: `Client` → `RealmClient` → per-resource services
//!   such as `UsersClient`, `GroupsClient`, `PoliciesClient`
//! - **Status ≠ Error**: every call that reaches the server returns
//!   `Ok(Response)`, including 404 and 409. `Err` means the exchange itself
//!   failed (configuration, network, timeout, decoding).
//! - **Base URL**: must end with `/`. A prefix such as `https://sso/auth/` is
//!   kept; paths are joined beneath it.
//! - **Optional Fields**: every representation field is an `Option`, and
//!   unset fields never appear on the wire.
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)
//! - `tracing` (default): Emit `tracing` events per request
//! - `integration-tests`: Build the live-server test suite

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod admin;
pub mod auth;
pub mod client;
pub mod error;
pub mod options;
pub mod types;

mod user_agent;

pub mod prelude;

pub use client::{Client, ClientBuilder, RealmClient, Response};
pub use error::{Error, ErrorKind, Result};
pub use options::QueryOptions;

pub use auth::{StaticTokenProvider, TokenProvider};
