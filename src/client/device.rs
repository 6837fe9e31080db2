use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::args::DEFAULT_USER_AGENT;
use crate::config::{ConfigPatch, PersistAction};
use crate::error::ClientError;

use super::endpoint::Endpoint;
use super::response::ApiResponse;
use super::task::TaskCommand;

/// Client for the device HTTP API.
///
/// Holds one pooled connection set for the lifetime of the process. Every
/// call returns the response for any HTTP status; only transport failures
/// are errors.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    base_url: String,
    client: Client,
}

impl DeviceClient {
    /// Builds a client for `base_url`, attaching `Authorization: Bearer` to
    /// every request when `api_key` is set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error for a base URL that is not absolute http(s), an API
    /// key that cannot be sent as a header, or a client builder failure.
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|err| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            source: err,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme {
                scheme: parsed.scheme().to_owned(),
            });
        }

        let mut headers = HeaderMap::new();
        if let Some(key) = api_key.filter(|key| !key.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|err| ClientError::InvalidToken { source: err })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|err| ClientError::BuildClient { source: err })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /status`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn status(&self) -> Result<ApiResponse, ClientError> {
        self.send(Endpoint::STATUS, |request| request).await
    }

    /// `GET /read`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn read(&self) -> Result<ApiResponse, ClientError> {
        self.send(Endpoint::READ, |request| request).await
    }

    /// `GET /config`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn config(&self) -> Result<ApiResponse, ClientError> {
        self.send(Endpoint::CONFIG_GET, |request| request).await
    }

    /// `GET /metrics`, asking for the plaintext exposition.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn metrics(&self) -> Result<ApiResponse, ClientError> {
        self.send(Endpoint::METRICS, |request| request).await
    }

    /// `POST /config` with the patch as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn post_config(&self, patch: &ConfigPatch) -> Result<ApiResponse, ClientError> {
        self.send(Endpoint::CONFIG_POST, |request| request.json(patch))
            .await
    }

    /// `POST /task` with `{"name", "action"}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn post_task(&self, command: TaskCommand) -> Result<ApiResponse, ClientError> {
        self.send(Endpoint::TASK_POST, |request| request.json(&command))
            .await
    }

    /// `POST /config/save`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn save_config(&self) -> Result<ApiResponse, ClientError> {
        self.send(Endpoint::CONFIG_SAVE, |request| request).await
    }

    /// `POST /config/discard`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn discard_config(&self) -> Result<ApiResponse, ClientError> {
        self.send(Endpoint::CONFIG_DISCARD, |request| request).await
    }

    /// Runs the follow-up call for `action`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn persist_config(&self, action: PersistAction) -> Result<ApiResponse, ClientError> {
        match action {
            PersistAction::Save => self.save_config().await,
            PersistAction::Discard => self.discard_config().await,
        }
    }

    async fn send<F>(&self, endpoint: Endpoint, with_body: F) -> Result<ApiResponse, ClientError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(endpoint.path);
        let request = self
            .client
            .request(endpoint.method.to_reqwest(), &url)
            .header(ACCEPT, endpoint.accept);

        tracing::debug!(method = %endpoint.method, url = %url, "Sending request");
        let started = Instant::now();
        let response = with_body(request)
            .send()
            .await
            .map_err(|err| ClientError::transport(&url, err))?;
        let response = ApiResponse::read(&url, response).await?;
        tracing::debug!(
            method = %endpoint.method,
            url = %url,
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "Response received"
        );
        Ok(response)
    }
}
