//! Bearer-token authentication for admin requests.
//!
//! Token acquisition is not part of this crate. Obtain an access token from
//! the server's token endpoint with any OAuth2 client, then either:
//!
//! - pass it to [`ClientBuilder::bearer_token`](crate::ClientBuilder::bearer_token), or
//! - implement [`TokenProvider`] to hand out a fresh token per request, or
//! - pre-configure a `reqwest::Client` with a default `Authorization` header
//!   and pass it to [`ClientBuilder::http_client`](crate::ClientBuilder::http_client).
//!
//! ```rust,ignore
//! use keycloak_admin::Client;
//!
//! let admin = Client::builder()
//!     .url("http://localhost:8080/")
//!     .bearer_token(access_token)
//!     .build()?;
//! ```

mod provider;

pub use provider::{StaticTokenProvider, TokenFuture, TokenProvider};
