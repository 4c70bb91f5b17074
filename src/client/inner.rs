//! Internal client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Request};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use super::Response;
use crate::auth::TokenProvider;
use crate::error::{Error, Result};

const APPLICATION_JSON: &str = "application/json";

pub(crate) struct ClientInner {
    /// Base URL every request path is resolved against.
    pub base_url: Url,

    /// HTTP client used for every exchange.
    pub http: reqwest::Client,

    /// Source of `Authorization: Bearer` tokens, if configured.
    pub token_provider: Option<Arc<dyn TokenProvider>>,

    /// Per-request timeout applied when the request has none.
    pub timeout: Option<Duration>,
}

impl ClientInner {
    /// Resolves `path` against the base URL and encodes `body` as JSON.
    pub(crate) fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        if !self.base_url.path().ends_with('/') {
            return Err(Error::configuration(format!(
                "base URL must have a trailing slash, but {:?} does not",
                self.base_url.as_str()
            )));
        }

        let url = self.base_url.join(path)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
                .body(encoded);
        }

        Ok(builder.build()?)
    }

    /// Sends a request, attaching credentials and the default timeout.
    async fn dispatch(&self, mut request: Request) -> Result<reqwest::Response> {
        if let Some(provider) = &self.token_provider
            && !request.headers().contains_key(AUTHORIZATION)
        {
            let token = provider.get_token().await?;
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::unauthorized("invalid bearer token format").with_source(e))?;
            value.set_sensitive(true);
            request.headers_mut().insert(AUTHORIZATION, value);
        }

        if let Some(timeout) = self.timeout
            && request.timeout().is_none()
        {
            *request.timeout_mut() = Some(timeout);
        }

        #[cfg(feature = "tracing")]
        let (method, url) = (request.method().clone(), request.url().clone());

        #[cfg(feature = "tracing")]
        tracing::debug!(%method, %url, "sending admin request");

        match self.http.execute(request).await {
            Ok(response) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%method, %url, status = response.status().as_u16(), "admin response received");
                Ok(response)
            },
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%method, %url, error = %err, "admin request failed");
                Err(err.into())
            },
        }
    }

    /// Sends a request and decodes the body as JSON regardless of status.
    pub(crate) async fn execute<T>(&self, request: Request) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();

        let bytes = response.bytes().await.map_err(|e| Error::from(e).with_status(status))?;
        let body = serde_json::from_slice(&bytes).map_err(|e| {
            Error::decode(format!("failed to decode response body: {}", e))
                .with_status(status)
                .with_source(e)
        })?;

        Ok(Response::new(status, headers, url, body))
    }

    /// Sends a request without reading the body.
    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        let response = self.dispatch(request).await?;
        Ok(Response::new(response.status(), response.headers().clone(), response.url().clone(), ()))
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::GET, path, None::<&()>)?;
        self.execute(request).await
    }

    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(Method::POST, path, Some(body))?;
        self.send(request).await
    }

    /// POST whose response carries a representation of the created record.
    pub(crate) async fn post_for<B, T>(&self, path: &str, body: &B) -> Result<Response<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::POST, path, Some(body))?;
        self.execute(request).await
    }

    pub(crate) async fn post_empty_for<T>(&self, path: &str) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::POST, path, None::<&()>)?;
        self.execute(request).await
    }

    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(Method::PUT, path, Some(body))?;
        self.send(request).await
    }

    pub(crate) async fn put_empty(&self, path: &str) -> Result<Response> {
        let request = self.build_request(Method::PUT, path, None::<&()>)?;
        self.send(request).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Response> {
        let request = self.build_request(Method::DELETE, path, None::<&()>)?;
        self.send(request).await
    }

    /// DELETE carrying a JSON body, as used by role-mapping removal.
    pub(crate) async fn delete_with<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(Method::DELETE, path, Some(body))?;
        self.send(request).await
    }
}
