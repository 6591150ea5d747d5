//! HTTP transport with bearer-token lifecycle
//!
//! This module provides the HTTP client used by the typed API facade. It owns
//! the access/refresh token pair: set on successful login, cleared on logout
//! or on a 401 response. Token absence means unauthenticated.

use std::{sync::RwLock, time::Duration};

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, warn};

use crate::error::{ClientError, Result};

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Backend base URL (e.g. "http://localhost:8000")
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Default read timeout in milliseconds; individual operations may override
    pub read_timeout_ms: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 10000,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config with the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }
}

/// Access/refresh token pair held for the process lifetime
#[derive(Clone, Debug)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// HTTP client with bearer authentication
pub struct EventHubHttpClient {
    client: Client,
    config: HttpClientConfig,
    tokens: RwLock<Option<TokenPair>>,
}

impl EventHubHttpClient {
    /// Create a new HTTP client
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            client,
            config,
            tokens: RwLock::new(None),
        })
    }

    /// Build full URL for an API path
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Store a token pair after a successful login
    pub fn set_tokens(&self, access_token: String, refresh_token: String) {
        let mut guard = self.tokens.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(TokenPair {
            access_token,
            refresh_token,
        });
    }

    /// Clear stored tokens (logout, or a 401 response)
    pub fn clear_tokens(&self) {
        let mut guard = self.tokens.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// Get the current access token, if any
    pub fn access_token(&self) -> Option<String> {
        let guard = self.tokens.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|t| t.access_token.clone())
    }

    /// Get the current refresh token, if any
    pub fn refresh_token(&self) -> Option<String> {
        let guard = self.tokens.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|t| t.refresh_token.clone())
    }

    /// True when a token pair is held
    pub fn is_authenticated(&self) -> bool {
        let guard = self.tokens.read().unwrap_or_else(|e| e.into_inner());
        guard.is_some()
    }

    /// Attach the bearer token when one is held
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        let request = self.with_auth(self.client.get(&url));
        self.send(request, &url).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.with_auth(self.client.get(&url).query(query));
        self.send(request, &url).await
    }

    /// Make a GET request with query parameters and an operation-specific
    /// timeout, overriding the client-wide default
    pub async fn get_with_query_with_timeout<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        timeout: Duration,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.with_auth(self.client.get(&url).query(query).timeout(timeout));
        self.send(request, &url).await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.with_auth(self.client.post(&url).json(body));
        self.send(request, &url).await
    }

    /// Make a POST request with a JSON body and an operation-specific timeout
    pub async fn post_json_with_timeout<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.with_auth(self.client.post(&url).json(body).timeout(timeout));
        self.send(request, &url).await
    }

    /// Make a POST request with form data and an operation-specific timeout
    pub async fn post_form_with_timeout<T: DeserializeOwned, F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
        timeout: Duration,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.with_auth(self.client.post(&url).form(form).timeout(timeout));
        self.send(request, &url).await
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.with_auth(self.client.patch(&url).json(body));
        self.send(request, &url).await
    }

    /// Make a POST request with multipart form data (for file uploads)
    pub async fn post_multipart_with_timeout<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        timeout: Duration,
    ) -> Result<T> {
        let url = self.build_url(path);
        let request = self.with_auth(self.client.post(&url).multipart(form).timeout(timeout));
        self.send(request, &url).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> Result<T> {
        debug!("Sending request to {}", url);
        let response = request.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            ClientError::from(e)
        })?;
        self.handle_response(response).await
    }

    /// Handle response status and parse JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Received 401, clearing stored tokens");
            self.clear_tokens();
            return Err(ClientError::Unauthorized {
                status: status.as_u16(),
            });
        }
        if status == StatusCode::FORBIDDEN {
            return Err(ClientError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if status.is_success() {
            let body = response.text().await.map_err(ClientError::from)?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            Err(ClientError::RequestFailed {
                status: status.as_u16(),
                body,
            })
        }
    }
}
