//! HTTP client for the gateway control-plane API.

use std::time::Duration;

use gateops_contract::{OperationContract, OperationIdentity};
use tracing::debug;

use crate::constants;
use crate::error::{OperatorError, Result};

/// Connection settings for the control plane.
#[derive(Debug, Clone)]
pub struct ControlPlaneConfig {
    /// Base URL, e.g. `https://manage.gateway.example.com`.
    pub endpoint: String,
    /// API key sent as `X-API-Key`, when the deployment requires one.
    pub api_key: Option<String>,
    /// Transport-level request timeout. Per-operation deadlines are the
    /// caller's cancellation token, not this.
    pub timeout: Duration,
}

impl ControlPlaneConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(constants::defaults::TIMEOUT_SECS),
        }
    }

    /// Read endpoint and API key from the environment.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var(constants::env::ENDPOINT).map_err(|_| {
            OperatorError::Config(format!("{} is not set", constants::env::ENDPOINT))
        })?;
        let mut config = Self::new(endpoint);
        config.api_key = std::env::var(constants::env::API_KEY).ok();
        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Client for the versioned control-plane API.
///
/// Every call addresses the operation by its canonical path and pins
/// the contract version via query parameter.
pub struct ControlPlaneClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ControlPlaneClient {
    pub fn new(config: ControlPlaneConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("HTTP client should build"),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    /// Create or update an operation: PUT on its canonical path.
    ///
    /// The control plane upserts: the call succeeds whether or not the
    /// resource already exists. The response body is not consulted; the
    /// controller confirms the write with a follow-up read.
    pub async fn upsert_operation(
        &self,
        identity: &OperationIdentity,
        contract: &OperationContract,
    ) -> Result<()> {
        let url = self.url_for(identity);
        debug!(operation = %identity.operation, "PUT {url}");
        let resp = self
            .with_key(self.http.put(&url))
            .json(contract)
            .send()
            .await?;
        Self::check_status(resp).await?;
        Ok(())
    }

    /// Fetch an operation. `Ok(None)` when the control plane has no
    /// such resource.
    pub async fn get_operation(
        &self,
        identity: &OperationIdentity,
    ) -> Result<Option<OperationContract>> {
        let url = self.url_for(identity);
        debug!(operation = %identity.operation, "GET {url}");
        let resp = self.with_key(self.http.get(&url)).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = Self::check_status(resp).await?;
        Ok(Some(resp.json().await?))
    }

    /// Delete an operation. Returns `false` when the resource was
    /// already gone.
    pub async fn delete_operation(&self, identity: &OperationIdentity) -> Result<bool> {
        let url = self.url_for(identity);
        debug!(operation = %identity.operation, "DELETE {url}");
        let resp = self.with_key(self.http.delete(&url)).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::check_status(resp).await?;
        Ok(true)
    }

    fn url_for(&self, identity: &OperationIdentity) -> String {
        format!(
            "{}{}?{}={}",
            self.endpoint,
            identity.path(),
            constants::api::VERSION_PARAM,
            constants::api::VERSION
        )
    }

    fn with_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(constants::api::KEY_HEADER, key),
            None => request,
        }
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        Err(OperatorError::ControlPlane {
            status: status.as_u16(),
            message,
        })
    }
}
