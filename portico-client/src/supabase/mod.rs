//! Supabase-compatible backend adapter.
//!
//! One [`SupabaseClient`] is shared by everything that talks to the hosted
//! project. It owns the HTTP client, the project coordinates and the
//! in-memory access token; [`rest`] describes table operations and
//! [`auth`] covers the authentication endpoints.

pub mod auth;
pub mod rest;

use std::sync::{Arc, Mutex};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::config::ConsoleConfig;
use shared::models::{Error, RemoteErrorBody, Result};

use self::rest::{TableRequest, Verb, parse_content_range};

/// Lightweight client for the hosted project's REST surface.
///
/// Cloning is cheap and clones share the access token, mirroring how the
/// console keeps exactly one authenticated identity at a time.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    config: ConsoleConfig,
    http: Client,
    access_token: Arc<Mutex<Option<String>>>,
}

impl SupabaseClient {
    /// Create a client for the given project coordinates.
    #[must_use]
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            http: Client::new(),
            access_token: Arc::new(Mutex::new(None)),
        }
    }

    /// The project coordinates this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Replace the in-memory access token; `None` reverts to anonymous.
    pub fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.access_token.lock() {
            *guard = token;
        }
    }

    /// Current in-memory access token, if a sign-in succeeded.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    /// Bearer credential for the next request: the user token when present,
    /// the anonymous key otherwise.
    fn bearer(&self) -> String {
        self.access_token()
            .unwrap_or_else(|| self.config.anon_key.clone())
    }

    fn keyed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", self.bearer()))
    }

    pub(crate) fn http_get(&self, url: &str) -> RequestBuilder {
        self.keyed(self.http.get(url))
    }

    pub(crate) fn http_post(&self, url: &str) -> RequestBuilder {
        self.keyed(self.http.post(url))
    }

    fn table_request(&self, request: &TableRequest) -> RequestBuilder {
        let method = match request.verb() {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        };
        let url = format!("{}/{}", self.config.rest_url(), request.table());

        let mut builder = self.keyed(self.http.request(method, url));
        builder = builder.query(request.query());
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        builder
    }

    /// Execute a read, returning the rows and the exact total when the
    /// request asked for one.
    ///
    /// # Errors
    /// [`Error::Http`] when no response was produced, [`Error::Remote`] when
    /// the store rejected the operation.
    pub async fn rows<T: DeserializeOwned>(
        &self,
        request: TableRequest,
    ) -> Result<(Vec<T>, Option<u64>)> {
        let response = self
            .table_request(&request)
            .send()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }

        let total = response
            .headers()
            .get("content-range")
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range);

        let items = response
            .json::<Vec<T>>()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;
        Ok((items, total))
    }

    /// Execute a mutation that returns exactly one stored row.
    ///
    /// # Errors
    /// [`Error::Http`] when no response was produced, [`Error::Remote`] when
    /// the store rejected the operation — including a zero-row match, which
    /// the store reports as an error rather than an empty result.
    pub async fn row<T: DeserializeOwned>(&self, request: TableRequest) -> Result<T> {
        let response = self
            .table_request(&request)
            .send()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|err| Error::Http(err.to_string()))
    }

    /// Execute a mutation whose response body is irrelevant (deletes).
    ///
    /// # Errors
    /// [`Error::Http`] when no response was produced, [`Error::Remote`] when
    /// the store rejected the operation.
    pub async fn execute(&self, request: TableRequest) -> Result<()> {
        let response = self
            .table_request(&request)
            .send()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }
        Ok(())
    }
}

/// Fold a non-success table response into the error taxonomy.
async fn remote_error(response: Response) -> Error {
    let status = response.status();
    match response.json::<RemoteErrorBody>().await {
        Ok(body) => Error::from(body),
        Err(_) => Error::remote(format!("request failed with status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SupabaseClient {
        SupabaseClient::new(ConsoleConfig::with_project(
            "https://acme.supabase.co",
            "anon-key",
        ))
    }

    #[test]
    fn bearer_falls_back_to_the_anonymous_key() {
        let client = test_client();
        assert_eq!(client.bearer(), "anon-key");
    }

    #[test]
    fn bearer_prefers_the_user_token() {
        let client = test_client();
        client.set_access_token(Some("user-jwt".to_string()));
        assert_eq!(client.bearer(), "user-jwt");
        assert_eq!(client.access_token().as_deref(), Some("user-jwt"));
    }

    #[test]
    fn clones_share_the_access_token() {
        let client = test_client();
        let clone = client.clone();
        client.set_access_token(Some("user-jwt".to_string()));
        assert_eq!(clone.access_token().as_deref(), Some("user-jwt"));

        clone.set_access_token(None);
        assert_eq!(client.access_token(), None);
    }
}
