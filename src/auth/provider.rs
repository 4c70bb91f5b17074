//! Token provider trait for attaching bearer tokens to admin requests.

use std::{fmt, future::Future, pin::Pin, sync::Arc};

use crate::Error;

/// A type alias for the boxed future returned by token providers.
pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<String, Error>> + Send + 'a>>;

/// Source of bearer tokens for the admin API.
///
/// The client calls [`get_token`](TokenProvider::get_token) once per request
/// and sends the result as `Authorization: Bearer <token>`. How the token is
/// obtained (resource-owner password grant against `admin-cli`, client
/// credentials, a secret store) is up to the implementation; this crate never
/// talks to the token endpoint itself.
///
/// ## Object Safety
///
/// This trait is object-safe and can be used as `Arc<dyn TokenProvider>`.
///
/// ## Example: Environment Variable Provider
///
/// ```rust
/// use keycloak_admin::auth::{TokenFuture, TokenProvider};
///
/// struct EnvTokenProvider {
///     env_var: String,
/// }
///
/// impl TokenProvider for EnvTokenProvider {
///     fn get_token(&self) -> TokenFuture<'_> {
///         let env_var = self.env_var.clone();
///         Box::pin(async move {
///             std::env::var(&env_var).map_err(|_| {
///                 keycloak_admin::Error::unauthorized(format!(
///                     "environment variable {} not set",
///                     env_var
///                 ))
///             })
///         })
///     }
/// }
/// ```
pub trait TokenProvider: Send + Sync {
    /// Returns a future that resolves to a bearer token.
    ///
    /// # Errors
    ///
    /// Return an error if the token cannot be obtained. The client propagates
    /// it to the caller of the originating operation unchanged.
    fn get_token(&self) -> TokenFuture<'_>;
}

impl<T: TokenProvider + ?Sized> TokenProvider for Arc<T> {
    fn get_token(&self) -> TokenFuture<'_> {
        (**self).get_token()
    }
}

impl<T: TokenProvider + ?Sized> TokenProvider for Box<T> {
    fn get_token(&self) -> TokenFuture<'_> {
        (**self).get_token()
    }
}

/// A provider that always returns the same token.
///
/// Suitable for short-lived tooling or when token refresh is handled by
/// rebuilding the client.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: Arc<str>,
}

impl StaticTokenProvider {
    /// Creates a new static token provider.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }

    /// Returns the token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl TokenProvider for StaticTokenProvider {
    fn get_token(&self) -> TokenFuture<'_> {
        let token = self.token.clone();
        Box::pin(async move { Ok(token.to_string()) })
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl<S: Into<String>> From<S> for StaticTokenProvider {
    fn from(token: S) -> Self {
        Self::new(token)
    }
}
