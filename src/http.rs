//! Shared request plumbing: bearer-credential injection and response mapping.
//!
//! DESIGN
//! ======
//! [`authorize`] is the single interception point for outgoing calls: it
//! reads nothing but the token it is handed and attaches the bearer header
//! when one is present. It runs once per request, before dispatch. There is
//! no refresh-and-retry on 401 — an authorization failure surfaces to the
//! caller like any other backend rejection.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::config::ApiConfig;
use crate::error::{ApiError, flatten_error_message};
use crate::session::SessionStore;

/// Attach the access token as a bearer credential, or forward the request
/// unmodified when there is none.
pub(crate) fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

/// HTTP layer shared by the auth gateway and the content service.
pub(crate) struct Api {
    client: reqwest::Client,
    config: ApiConfig,
    store: Arc<SessionStore>,
}

impl Api {
    pub(crate) fn new(config: ApiConfig, store: Arc<SessionStore>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            store,
        }
    }

    pub(crate) fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Build an authorized request for `path`. The current access token is
    /// looked up at call time, so a request started after logout goes out
    /// bare.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.config.endpoint(path));
        authorize(builder, self.store.access_token().as_deref())
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::GET, path), path, fallback)
            .await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
        fallback: &str,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::POST, path).json(body), path, fallback)
            .await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        fallback: &str,
    ) -> Result<T, ApiError> {
        self.dispatch(
            self.request(Method::POST, path).multipart(form),
            path,
            fallback,
        )
        .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::DELETE, path), path, fallback)
            .await
    }

    /// Send a request, map a non-success status to [`ApiError::Api`] with
    /// the flattened backend payload, and decode a success body as `T`.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let payload = response.json::<Value>().await.unwrap_or(Value::Null);
        let message = flatten_error_message(&payload, fallback);
        warn!(status = status.as_u16(), path, %message, "api request rejected");
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
