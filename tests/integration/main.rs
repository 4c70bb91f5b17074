//! Integration tests for keycloak-admin.
//!
//! These tests run against a live server, for example:
//!
//! ```bash
//! docker run -p 8080:8080 \
//!   -e KC_BOOTSTRAP_ADMIN_USERNAME=admin \
//!   -e KC_BOOTSTRAP_ADMIN_PASSWORD=admin \
//!   quay.io/keycloak/keycloak:26.0 start-dev
//! ```
//!
//! # Running Tests
//!
//! ```bash
//! # Single-threaded: the realm scenario uses the fixed name `first`
//! cargo test --features integration-tests --test integration -- --test-threads=1
//!
//! # With request logging
//! RUST_LOG=keycloak_admin=debug \
//!   cargo test --features integration-tests --test integration -- --test-threads=1 --nocapture
//! ```
//!
//! # Environment Variables
//!
//! - `KEYCLOAK_URL`: Server base URL (default: `http://localhost:8080/`)
//! - `KEYCLOAK_ADMIN`: Admin username in the master realm (default: `admin`)
//! - `KEYCLOAK_ADMIN_PASSWORD`: Admin password (default: `admin`)

mod authz_tests;
mod common;
mod realm_tests;
mod user_tests;
