//! HTTP client for the reqres.in demo API.
//!
//! One [`ApiClient`] is built at start-up and shared by every screen. It owns
//! a pooled `reqwest::Client` and the two resolved endpoint URLs, and turns
//! every way a call can go wrong into an [`ApiError`].

use super::config::ClientConfig;
use crate::domain::{
    ApiError, ApiResult, ConfigError, ErrorBody, RegisterRequest, RegisterResponse, User,
    UserApi, UserListResponse,
};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::error::Error as StdError;

pub const REGISTER_PATH: &str = "register";
pub const USERS_PATH: &str = "users";

/// Shared, immutable client for the demo API.
///
/// # Examples
///
/// ```
/// use signup_tui::infrastructure::{ApiClient, ClientConfig};
///
/// let client = ApiClient::new(&ClientConfig::default()).unwrap();
/// assert_eq!(client.register_url().as_str(), "https://reqres.in/api/register");
/// assert_eq!(client.users_url().as_str(), "https://reqres.in/api/users");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    register_url: Url,
    users_url: Url,
    api_key: Option<String>,
}

impl ApiClient {
    /// Builds the client and resolves both endpoints against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the base URL does not parse
    /// and [`ConfigError::HttpClient`] when the TLS backend cannot start.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base = config.normalized_base_url();
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };

        let base_url = Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("url cannot be used as a base".to_string()));
        }
        let register_url = base_url.join(REGISTER_PATH).map_err(|e| invalid(e.to_string()))?;
        let users_url = base_url.join(USERS_PATH).map_err(|e| invalid(e.to_string()))?;

        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        tracing::debug!(base_url = %base_url, "api client ready");

        Ok(Self {
            http,
            register_url,
            users_url,
            api_key: config.api_key.clone(),
        })
    }

    pub fn register_url(&self) -> &Url {
        &self.register_url
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(ACCEPT, "application/json");
        match &self.api_key {
            Some(key) => request.header("x-api-key", key.as_str()),
            None => request,
        }
    }

    /// Sends a prepared request and decodes a 2xx JSON body into `T`.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self
            .prepare(request)
            .send()
            .await
            .map_err(|e| ApiError::NetworkFailure(describe(&e)))?;

        let status = response.status();
        let url = response.url().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::NetworkFailure(describe(&e)))?;

        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            let reason = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            return Err(ApiError::ServerRejected {
                status: status.as_u16(),
                reason,
            });
        }

        if body.is_empty() {
            return Err(ApiError::MalformedResponse("response body is empty".to_string()));
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        tracing::debug!(url = %self.register_url, "registering account");
        let result = self
            .execute(self.http.post(self.register_url.clone()).json(request))
            .await;
        if let Err(ref e) = result {
            tracing::debug!(error = %e, "register failed");
        }
        result
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        tracing::debug!(url = %self.users_url, "listing users");
        let result = self
            .execute::<UserListResponse>(self.http.get(self.users_url.clone()))
            .await
            .map(|list| list.data);
        if let Err(ref e) = result {
            tracing::debug!(error = %e, "list users failed");
        }
        result
    }
}

/// Flattens an error and its sources into one line. reqwest's own message
/// stops at "error sending request", the cause is further down the chain.
fn describe(error: &(dyn StdError + 'static)) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
