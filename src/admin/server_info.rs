//! Server information.

use crate::client::{Client, Response};
use crate::types::ServerInfoRepresentation;
use crate::Result;

/// Client for `admin/serverinfo`.
///
/// Access via `admin.server_info()`.
#[derive(Clone)]
pub struct ServerInfoClient {
    client: Client,
}

impl ServerInfoClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Gets the server's version, runtime, and feature information.
    pub async fn get(&self) -> Result<Response<ServerInfoRepresentation>> {
        self.client.inner().get("admin/serverinfo").await
    }
}

impl std::fmt::Debug for ServerInfoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerInfoClient").finish_non_exhaustive()
    }
}
